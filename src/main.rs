//! Quiz Site Actions Entry Point

fn main() {
    quiz_site_actions::start();
}
