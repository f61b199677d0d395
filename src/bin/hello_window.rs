use log::error;

use solar::prelude::*;
use solar::tutorial::HelloWindow;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut engine = match Engine::new(Settings::default()) {
        Ok(v) => v,
        Err(err) => {
            error!("{}", err);
            std::process::exit(-1);
        }
    };

    if let Err(err) = engine.run(&mut HelloWindow) {
        error!("{}", err);
        std::process::exit(1);
    }
}
