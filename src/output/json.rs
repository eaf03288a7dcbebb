use serde::Serialize;

/// Pretty-printed JSON on stdout for `--json` mode.
pub(crate) fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Warning: failed to serialize output: {e}"),
    }
}
