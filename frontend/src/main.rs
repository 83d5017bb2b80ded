fn main() {
    carebot_frontend::start();
}
