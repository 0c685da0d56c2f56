use pc_diorama::{config::Config, desktop, flow};

fn main() -> anyhow::Result<()> {
    flow::run(desktop::scene(), Config::from_env())
}
