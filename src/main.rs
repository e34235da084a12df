fn main() {
    patience_engine::run();
}
