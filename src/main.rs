fn main() {
    // Run the CLI
    rustoc::cli::run();
}
