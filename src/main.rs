use std::env;
use std::fs;
use std::process;

use changes::{
    analyze_song, category_of, check_availability, interval_between, parse_chord_name,
    Availability, Song, VoicingDictionary,
};

const USAGE: &str = "Usage: changes [--json] <chord>...
       changes --interval <root> <root>
       changes --song <song.yaml>";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    match args[0].as_str() {
        "--interval" => {
            if args.len() != 3 {
                eprintln!("{}", USAGE);
                process::exit(1);
            }
            print_interval(&args[1], &args[2]);
        }
        "--song" => {
            if args.len() != 2 {
                eprintln!("{}", USAGE);
                process::exit(1);
            }
            print_song(&args[1]);
        }
        "--json" => {
            if args.len() < 2 {
                eprintln!("{}", USAGE);
                process::exit(1);
            }
            print_json(&args[1..]);
        }
        _ => print_chords(&args),
    }
}

fn print_chords(tokens: &[String]) {
    let mut failed = false;

    for token in tokens {
        let chord = parse_chord_name(token);
        if let Some(error) = &chord.error {
            eprintln!("{}", error);
            failed = true;
            continue;
        }

        let quality = if chord.is_major {
            "major"
        } else if chord.is_minor {
            "minor"
        } else {
            "other"
        };
        let availability = match check_availability(&chord.root, &chord.suffix) {
            Availability::Available => "voiced".to_string(),
            Availability::UnknownRoot { .. } => "no voicing".to_string(),
            Availability::UnknownSuffix { suggestions } => {
                format!("no voicing (try {})", suggestions.join(", "))
            }
        };

        println!(
            "{}\troot={} suffix={} {}\t{}",
            token, chord.root, chord.suffix, quality, availability
        );
    }

    if failed {
        process::exit(1);
    }
}

fn print_json(tokens: &[String]) {
    let parsed: Vec<_> = tokens.iter().map(|t| parse_chord_name(t)).collect();
    match serde_json::to_string_pretty(&parsed) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error encoding JSON: {}", e);
            process::exit(1);
        }
    }
}

fn print_interval(a: &str, b: &str) {
    let interval = interval_between(a, b);
    let category = category_of(interval);
    println!(
        "{} -> {}: {} ({:?}, {})",
        a, b, interval, category.shape, category.background_color
    );
}

fn print_song(path: &str) {
    let source = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path, e);
            process::exit(1);
        }
    };

    let song = match Song::from_yaml(path, &source) {
        Ok(song) => song,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let report = analyze_song(&song, VoicingDictionary::builtin());
    println!("{} ({})", song.title, song.composed_by);
    println!(
        "{}, {}/{}, {} bars, {} distinct chords",
        song.key_signature,
        song.time_signature.0,
        song.time_signature.1,
        song.bars,
        report.distinct_chords
    );

    for span in song.squashed_chords() {
        let class = if span.parsed.is_error() {
            "!"
        } else if span.parsed.is_major {
            "M"
        } else if span.parsed.is_minor {
            "m"
        } else {
            "x"
        };
        println!(
            "  {:>3}-{:<3} {:<10} {}",
            span.start_index, span.end_index, span.chord, class
        );
    }

    let motion: Vec<String> = song
        .root_motion()
        .iter()
        .map(|m| m.interval.to_string())
        .collect();
    println!("Root motion: {}", motion.join(" "));

    if report.has_errors() {
        eprintln!("Parsing errors: {}", report.problem_chords.join(", "));
        process::exit(1);
    }
}
