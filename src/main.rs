use mkfavicon::create_favicon;

fn main() {
    create_favicon().expect("failed to write favicon.ico");
}
