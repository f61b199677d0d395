use log::error;

use solar::prelude::*;
use solar::tutorial::HelloTriangle;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut engine = match Engine::new(Settings::default()) {
        Ok(v) => v,
        Err(err) => {
            error!("{}", err);
            std::process::exit(-1);
        }
    };

    let mut application = HelloTriangle::new();
    if let Err(err) = engine.run(&mut application) {
        error!("{}", err);
        std::process::exit(1);
    }
}
