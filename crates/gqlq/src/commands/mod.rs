mod demo;

use crate::Cli;
use crate::CommandResult;
use demo::DemoCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlq")]
pub(crate) enum CommandEnum {
    Demo(Box<DemoCmd>),
}
impl CommandEnum {
    pub(crate) fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Demo(cmd) => cmd.run(cli)
        }
    }
}
