//! Entrypoint.

fn main() {
    match reviewbot::initialize_command_line() {
        Ok(outcome) if outcome.is_failure() => std::process::exit(1),
        Ok(_) => (),
        Err(err) => {
            eprintln!("ERROR: {:?}", err);
            std::process::exit(1);
        }
    }
}
