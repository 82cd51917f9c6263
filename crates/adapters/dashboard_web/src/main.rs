fn main() {
    campanel_dashboard::start();
}
