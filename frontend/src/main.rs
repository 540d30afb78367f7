fn main() {
    staffboard_frontend::run();
}
