fn main() -> Result<(), Box<dyn std::error::Error>> {
    nowplaying::runtime::run()
}
