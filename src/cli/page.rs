use notekeep::Route;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The page to show: /privacy-policy, /terms-of-service, or /contact
    route: Route,
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self.route.page() {
            Some(page) => print!("{page}"),
            None => println!("The note list lives at '{}'; run 'note list'.", self.route),
        }
        Ok(())
    }
}
