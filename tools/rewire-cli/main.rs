use clap::{Parser, Subcommand};
use rewire::prelude::*;
use rewire::quiz::sort_summaries;
use serde::Serialize;
use std::fs;

/// Check connections and grade attempts for workflow reconstruction quizzes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Node schema catalogue JSON to use instead of the built-in one
    #[arg(short, long, global = true)]
    schemas: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a single connection may be drawn
    Check {
        /// Path to the quiz JSON file
        quiz_path: String,
        #[arg(long)]
        source_node: String,
        #[arg(long)]
        source_handle: String,
        #[arg(long)]
        target_node: String,
        #[arg(long)]
        target_handle: String,
    },
    /// Grade a submission file against the quiz's hidden edges
    Grade {
        /// Path to the quiz JSON file
        quiz_path: String,
        /// Path to the submission JSON file
        submission_path: String,
    },
    /// Show the next missing connection
    Hint {
        /// Path to the quiz JSON file
        quiz_path: String,
        /// Ids of hidden edges that are already connected
        #[arg(short, long = "connected")]
        connected: Vec<String>,
    },
    /// Print the quiz as the player sees it
    View {
        /// Path to the quiz JSON file
        quiz_path: String,
    },
    /// List quiz summaries, easiest first
    List {
        /// Paths to quiz JSON files
        quiz_paths: Vec<String>,
    },
    /// Print the schema catalogue, or a single node type's schema
    Schemas {
        node_type: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let catalogue = load_catalogue(cli.schemas.as_deref());

    match cli.command {
        Command::Check {
            quiz_path,
            source_node,
            source_handle,
            target_node,
            target_handle,
        } => {
            let quiz = load_quiz(&quiz_path);
            let proposal =
                EdgeProposal::new(source_node, source_handle, target_node, target_handle);
            print_json(&validate_edge(&quiz.workflow, &catalogue, &proposal));
        }
        Command::Grade {
            quiz_path,
            submission_path,
        } => {
            let quiz = load_quiz(&quiz_path);
            let submission_json = read_file(&submission_path);
            let submission = Submission::from_json(&submission_json)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            let report = score_submission(
                &quiz,
                &catalogue,
                &submission.proposed_edges,
                &submission.player_node_mappings,
            );
            print_json(&report);
        }
        Command::Hint {
            quiz_path,
            connected,
        } => {
            let quiz = load_quiz(&quiz_path);
            print_json(&next_hint(&quiz, connected.as_slice()));
        }
        Command::View { quiz_path } => {
            let quiz = load_quiz(&quiz_path);
            print_json(&quiz.player_view(&catalogue));
        }
        Command::List { quiz_paths } => {
            let summaries = quiz_paths.iter().map(|path| load_quiz(path).summary());
            print_json(&sort_summaries(summaries));
        }
        Command::Schemas { node_type } => match node_type {
            Some(node_type) => match catalogue.lookup(&node_type) {
                SchemaLookup::Found(schema) => print_json(schema),
                SchemaLookup::Unknown => {
                    exit_with_error(&format!("Node schema '{}' not found", node_type))
                }
            },
            None => print_json(&catalogue),
        },
    }
}

fn load_catalogue(path: Option<&str>) -> SchemaCatalogue {
    match path {
        Some(path) => SchemaCatalogue::from_json(&read_file(path)).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load schemas from '{}': {}", path, e))
        }),
        None => SchemaCatalogue::builtin(),
    }
}

fn load_quiz(path: &str) -> Quiz {
    let quiz = Quiz::from_json(&read_file(path))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load quiz '{}': {}", path, e)));
    if let Err(e) = quiz.verify() {
        log::warn!("quiz '{}' is inconsistent: {}", quiz.id, e);
    }
    quiz
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read file '{}': {}", path, e)))
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to serialize result: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
