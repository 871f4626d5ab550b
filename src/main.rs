use par_term_profile_editor::cli;

fn main() {
    // The CLI installs the log bridge itself once --log-level is known
    let code = cli::process_cli();
    log::logger().flush();
    if code != 0 {
        std::process::exit(code);
    }
}
