fn main() {
    claude_status::app::cli::run();
}
