//! Manage the VibeVoice demo voices directory
//!
//! Usage:
//!   voices [--voices-dir DIR] add <source> <speaker> [--language L] [--gender G]
//!   voices [--voices-dir DIR] bgm <voice> <music> <speaker> [--language L] [--volume V]
//!   voices [--voices-dir DIR] list [--json]
//!   voices validate [--json] <file1> <file2> ...
//!
//! With no command the voices directory is listed. Set `RUST_LOG=debug` for
//! pipeline details.

use std::env;
use std::process;

use vibevoice_voices::voices::naming::BGM_TAG;
use vibevoice_voices::voices::validation::inspect_voice_file;
use vibevoice_voices::{
    add_voice, list_available_voices, mix_background_voice, VoiceConfig, VoiceError,
    VoiceName,
};

const USAGE: &str = "Usage: voices [--voices-dir DIR] <command> [args]\n\
     \n\
     Commands:\n\
     \x20 add <source> <speaker> [--language L] [--gender G]\n\
     \x20 bgm <voice> <music> <speaker> [--language L] [--volume V]\n\
     \x20 list [--json]\n\
     \x20 validate [--json] <file1> <file2> ...\n\
     \n\
     --voices-dir DIR   Voices directory (default: demo/voices)\n\
     --json             Emit one JSON object per line (JSONL)\n";

/// Remove `--flag VALUE` from `args`, returning the value
fn take_option(args: &mut Vec<String>, flag: &str) -> Result<Option<String>, String> {
    let Some(idx) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if idx + 1 >= args.len() {
        return Err(format!("{} requires a value", flag));
    }
    let value = args.remove(idx + 1);
    args.remove(idx);
    Ok(Some(value))
}

/// Remove a boolean `--flag` from `args`
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    match args.iter().position(|a| a == flag) {
        Some(idx) => {
            args.remove(idx);
            true
        }
        None => false,
    }
}

fn usage_error(msg: &str) -> ! {
    eprintln!("ERROR: {}\n\n{}", msg, USAGE);
    process::exit(2);
}

fn main() {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    if take_flag(&mut args, "--help") || take_flag(&mut args, "-h") {
        eprintln!("{}", USAGE);
        return;
    }

    let mut config = VoiceConfig::default();
    match take_option(&mut args, "--voices-dir") {
        Ok(Some(dir)) => config = config.with_voices_dir(dir),
        Ok(None) => {}
        Err(e) => usage_error(&e),
    }

    let command = if args.is_empty() {
        "list".to_string()
    } else {
        args.remove(0)
    };

    let code = match command.as_str() {
        "add" => run_add(args, &config),
        "bgm" => run_bgm(args, &config),
        "list" => run_list(args, &config),
        "validate" => run_validate(args, &config),
        other => usage_error(&format!("unknown command '{}'", other)),
    };
    process::exit(code);
}

fn run_add(mut args: Vec<String>, config: &VoiceConfig) -> i32 {
    let language = take_option(&mut args, "--language")
        .unwrap_or_else(|e| usage_error(&e))
        .unwrap_or_else(|| config.default_language.clone());
    let gender = take_option(&mut args, "--gender")
        .unwrap_or_else(|e| usage_error(&e))
        .unwrap_or_else(|| config.default_gender.clone());
    let [source, speaker] = args.as_slice() else {
        usage_error("add expects <source> <speaker>");
    };

    let result = VoiceName::new(&language, speaker, &gender)
        .map_err(VoiceError::from)
        .and_then(|name| add_voice(source, &name, config).map(|path| (name, path)));
    match result {
        Ok((name, path)) => {
            println!("Voice added: {}", path.display());
            println!("Speaker name for scripts: '{}'", name.speaker);
            0
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            1
        }
    }
}

fn run_bgm(mut args: Vec<String>, config: &VoiceConfig) -> i32 {
    let language = take_option(&mut args, "--language")
        .unwrap_or_else(|e| usage_error(&e))
        .unwrap_or_else(|| config.default_language.clone());
    let volume = match take_option(&mut args, "--volume").unwrap_or_else(|e| usage_error(&e)) {
        Some(v) => v
            .parse::<f32>()
            .unwrap_or_else(|_| usage_error(&format!("invalid volume '{}'", v))),
        None => config.music_volume,
    };
    let [voice, music, speaker] = args.as_slice() else {
        usage_error("bgm expects <voice> <music> <speaker>");
    };

    let result = VoiceName::new(&language, speaker, BGM_TAG)
        .map_err(VoiceError::from)
        .and_then(|name| mix_background_voice(voice, music, &name, volume, config));
    match result {
        Ok(path) => {
            println!("Voice with BGM created: {}", path.display());
            0
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            1
        }
    }
}

fn run_list(mut args: Vec<String>, config: &VoiceConfig) -> i32 {
    let json = take_flag(&mut args, "--json");
    if !args.is_empty() {
        usage_error("list takes no positional arguments");
    }

    if json {
        let records = match vibevoice_voices::voices::listing::scan_voices(&config.voices_dir) {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                eprintln!("ERROR: {}", e);
                return 1;
            }
        };
        for record in &records {
            match serde_json::to_string(record) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    eprintln!("ERROR: {}", e);
                    return 1;
                }
            }
        }
        return 0;
    }

    match list_available_voices(&config.voices_dir) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            1
        }
    }
}

fn run_validate(mut args: Vec<String>, config: &VoiceConfig) -> i32 {
    let json = take_flag(&mut args, "--json");
    if args.is_empty() {
        usage_error("validate expects at least one file");
    }

    let mut failures = 0;
    for path in &args {
        let outcome = inspect_voice_file(path, config);
        if !outcome.is_valid() {
            failures += 1;
        }
        if json {
            match serde_json::to_string(&outcome) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("ERROR: {}", e),
            }
        } else {
            println!("\n{}", outcome);
        }
    }

    eprintln!("Validated: ok={}/{}", args.len() - failures, args.len());
    if failures > 0 {
        1
    } else {
        0
    }
}
