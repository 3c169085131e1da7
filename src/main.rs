use clap::{Arg, Command};
use fraud_scan::analyzer::MessageAnalyzer;
use fraud_scan::classifier::NaiveBayesClassifier;
use fraud_scan::config::Config;
use fraud_scan::evaluation::{self, LabeledMessage};
use log::LevelFilter;
use std::io::Read;
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("fraud-scan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scores short text messages for spam/fraud likelihood and machine-generated authorship")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path (built-in defaults are used if the file does not exist)")
                .default_value("fraud-scan.yaml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default configuration to a file and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Validate the configuration and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("message")
                .short('m')
                .long("message")
                .value_name("TEXT")
                .help("Message text to analyze")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("message-file")
                .long("message-file")
                .value_name("FILE")
                .help("Read the message to analyze from a file (use - for stdin)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the analysis report as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Print classifier statistics after training and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("evaluate")
                .long("evaluate")
                .help("Measure held-out accuracy over the configured corpus and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(path) = matches.get_one::<String>("generate-config") {
        generate_default_config(path);
        return;
    }

    let config_path = matches.get_one::<String>("config").unwrap();
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e:#}");
            process::exit(1);
        }
    };

    if matches.get_flag("test-config") {
        match config.validate() {
            Ok(()) => {
                println!("Configuration OK");
                println!(
                    "  training corpus: {} spam / {} ham messages",
                    config.training.spam_messages.len(),
                    config.training.ham_messages.len()
                );
                println!("  AI threshold: {}", config.ai_threshold);
            }
            Err(e) => {
                eprintln!("Configuration invalid: {e:#}");
                process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = config.validate() {
        eprintln!("Configuration invalid: {e:#}");
        process::exit(1);
    }

    if matches.get_flag("evaluate") {
        run_evaluation(&config);
        return;
    }

    let analyzer = MessageAnalyzer::from_config(&config);

    if matches.get_flag("stats") {
        print_statistics(&analyzer, matches.get_flag("json"));
        return;
    }

    let message = match read_message(&matches) {
        Ok(message) => message,
        Err(e) => {
            eprintln!("Error reading message: {e:#}");
            process::exit(1);
        }
    };

    match analyzer.analyze(&message) {
        Ok(report) => {
            if matches.get_flag("json") {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error serializing report: {e}");
                        process::exit(1);
                    }
                }
            } else {
                print_report(&report);
            }
        }
        Err(e) => {
            eprintln!("Analysis failed: {e}");
            process::exit(1);
        }
    }
}

fn load_config(path: &str) -> anyhow::Result<Config> {
    let config_path = Path::new(path);
    if config_path.exists() {
        Config::load(config_path)
    } else {
        log::debug!("config file {path} not found, using built-in defaults");
        Ok(Config::default())
    }
}

fn generate_default_config(path: &str) {
    let config = Config::default();
    match config.save(Path::new(path)) {
        Ok(()) => println!("Default configuration written to {path}"),
        Err(e) => {
            eprintln!("Error writing configuration: {e:#}");
            process::exit(1);
        }
    }
}

fn read_message(matches: &clap::ArgMatches) -> anyhow::Result<String> {
    if let Some(text) = matches.get_one::<String>("message") {
        return Ok(text.clone());
    }
    if let Some(path) = matches.get_one::<String>("message-file") {
        if path == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            return Ok(buffer);
        }
        return Ok(std::fs::read_to_string(path)?);
    }
    // No explicit source: fall back to stdin so piping works
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_report(report: &fraud_scan::MessageReport) {
    println!("Analysis result");
    println!(
        "  Spam probability:   {:.2}%  (Bayes {:.2}%, keywords {:.2}%) [{}]",
        report.fraud_score, report.spam_probability, report.keyword_score, report.fraud_level
    );
    let ai_verdict = if report.ai_detected {
        "detected"
    } else {
        "not detected"
    };
    println!(
        "  AI authorship:      {:.2}%  ({ai_verdict}, confidence {:.0}%)",
        report.ai_probability, report.ai_confidence
    );
    println!(
        "  Overall risk:       {:.2}%  [{}]",
        report.overall_risk, report.overall_level
    );
}

fn print_statistics(analyzer: &MessageAnalyzer, as_json: bool) {
    let stats = analyzer.statistics();
    if as_json {
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing statistics: {e}");
                process::exit(1);
            }
        }
        return;
    }
    println!("Classifier statistics");
    println!("  spam messages:   {}", stats.spam_messages);
    println!("  ham messages:    {}", stats.ham_messages);
    println!("  vocabulary size: {}", stats.vocabulary_size);
    println!("  top spam words:");
    for (word, count) in &stats.top_spam_words {
        println!("    {word}: {count}");
    }
    println!("  top ham words:");
    for (word, count) in &stats.top_ham_words {
        println!("    {word}: {count}");
    }
}

fn run_evaluation(config: &Config) {
    let mut samples: Vec<LabeledMessage> = Vec::new();
    for message in &config.training.spam_messages {
        samples.push(LabeledMessage::new(message.clone(), true));
    }
    for message in &config.training.ham_messages {
        samples.push(LabeledMessage::new(message.clone(), false));
    }

    let mut rng = rand::thread_rng();
    let (train, test) = evaluation::train_test_split(samples, 0.2, &mut rng);
    if test.is_empty() {
        eprintln!("Corpus too small to hold out a test set");
        process::exit(1);
    }

    let spam: Vec<String> = train
        .iter()
        .filter(|s| s.is_spam)
        .map(|s| s.text.clone())
        .collect();
    let ham: Vec<String> = train
        .iter()
        .filter(|s| !s.is_spam)
        .map(|s| s.text.clone())
        .collect();

    let mut classifier = NaiveBayesClassifier::new();
    classifier.train(&spam, &ham);

    match evaluation::evaluate(&classifier, &test) {
        Ok(accuracy) => {
            println!(
                "Held-out accuracy: {accuracy:.2}% ({} train / {} test messages)",
                train.len(),
                test.len()
            );
        }
        Err(e) => {
            // A shuffle can strand one class entirely in the test split
            eprintln!("Evaluation failed: {e}");
            process::exit(1);
        }
    }
}
