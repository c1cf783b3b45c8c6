fn main() {
    rangelab_cli::cli::run();
}
