use quickswitch::cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Cli::run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("[quickswitch error]: {err}");
            std::process::exit(1);
        }
    }
}
