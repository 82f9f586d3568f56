use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(name = "ovkinfo", version, about = "OpenVK profile lookup client")]
pub struct Cli {
    #[arg(
        long,
        default_value = "default",
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(long, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose debug output")]
    pub verbose: u8,
    #[arg(help = "Numeric id, screen name, or profile url (prompts when omitted)")]
    pub identifier: Option<String>,
}
