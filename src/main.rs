use plexfield::Background;

fn main() {
    env_logger::init();

    Background::new().with_title("plexfield").run();
}
