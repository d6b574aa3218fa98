use log::info;
use clap::Parser;
use cfm_core::util::log::{level_filter, init_simple_logger};

use super::tour;
use super::utils::*;
use super::err::TourResult;

#[derive(Parser, Clone, Default, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    #[arg(value_enum)]
    pub index_set: IType,

    #[arg(short, long, default_value = "B")]
    pub prefix: String,

    #[arg(short = 't', long, default_value = "z")]
    pub ring: CType,

    #[arg(long)]
    pub table: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> TourResult<String> { 
        self.init_logger();

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) {
        let l = level_filter(self.args.log);
        if let Err(e) = init_simple_logger(l) { 
            eprintln!("failed to init logger: {e}");
        }
    }

    fn dispatch(&self) -> TourResult<String> { 
        guard_panic(||
            tour::dispatch(&self.args)
        )
    }
}
