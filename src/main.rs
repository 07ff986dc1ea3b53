fn main() {
    use costar_degrees::cli::parse;
    let cli = parse();
    let code = costar_degrees::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
