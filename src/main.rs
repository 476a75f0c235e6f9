use std::fs::File;
use std::io::BufReader;

use dotenv::dotenv;
use log::debug;
use question_set::quiz::{self, export, transform, Question, QuizError};

type MainResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

const DEFAULT_QUESTIONS_FILE: &str = "questions.json";

struct Config {
    questions_file: String,
    published_only: bool,
}

impl Config {
    fn from_env() -> quiz::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> quiz::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let questions_file =
            lookup("QUESTIONS_FILE").unwrap_or_else(|| DEFAULT_QUESTIONS_FILE.to_string());

        let published_only = match lookup("PUBLISHED_ONLY") {
            Some(value) => parse_flag("PUBLISHED_ONLY", &value)?,
            None => false,
        };

        Ok(Self {
            questions_file,
            published_only,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> quiz::Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(QuizError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn load_questions(path: &str) -> quiz::Result<Vec<Question>> {
    let reader = BufReader::new(File::open(path)?);
    let questions: Vec<Question> = serde_json::from_reader(reader)?;
    Ok(questions)
}

fn main() -> MainResult {
    // A missing .env is fine, the variables may come from the shell
    dotenv().ok();

    pretty_env_logger::init();
    log::info!("Starting question set export...");

    let config = Config::from_env()?;

    log::info!("Loading questions from '{}'", config.questions_file);
    let questions = load_questions(&config.questions_file)?;
    log::info!("Loaded {} questions", questions.len());

    let questions = if config.published_only {
        let published = transform::get_published_questions(&questions);
        debug!("Kept {} published questions", published.len());
        published
    } else {
        questions
    };

    println!("{}", export::to_csv(&questions));
    println!();
    println!("Names: {}", transform::get_names(&questions).join(", "));
    println!("Total points: {}", transform::sum_points(&questions));
    println!(
        "Published points: {}",
        transform::sum_published_points(&questions)
    );
    println!("Same type: {}", transform::same_type(&questions));

    Ok(())
}
