use haiku_core::{HaikuEngine, HaikuVerdict};
use serde_json::json;
use std::io::Read;
use std::process::ExitCode;

/// One-shot evaluator: reads a candidate haiku from stdin, prints the
/// verdict (and the dedup fingerprint when accepted), and exits non-zero on
/// rejection. `--json` switches to machine-readable output. Pass a path to
/// use a word list other than the embedded one.
fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let mut json_output = false;
    let mut word_list: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            path => word_list = Some(path.to_string()),
        }
    }

    let engine = match &word_list {
        Some(path) => HaikuEngine::from_file(std::path::Path::new(path)),
        None => HaikuEngine::builtin(),
    };
    let engine = match engine {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("failed to load syllable dictionary: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("failed to read stdin: {e}");
        return ExitCode::FAILURE;
    }

    let verdict = engine.evaluate(&text);
    let accepted = verdict.is_haiku();

    if json_output {
        let payload = json!({
            "verdict": verdict,
            "fingerprint": accepted.then(|| engine.fingerprint(&text).to_string()),
        });
        println!("{payload}");
    } else {
        match &verdict {
            HaikuVerdict::Accepted => {
                println!("haiku!");
                println!("fingerprint: {}", engine.fingerprint(&text));
            }
            HaikuVerdict::Rejected { reasons } => {
                println!("Hmmm, this doesn't seem like a traditional English Haiku; here's why:");
                for reason in reasons {
                    println!("- {reason}");
                }
            }
        }
    }

    if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
