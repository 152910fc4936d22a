use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "regimen", bin_name = "regimen", version)]
#[command(about = "Interactive log of your workout exercises", long_about = None)]
pub struct Cli {
    /// Print diagnostic logs to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Anything else on the command line is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub ignored: Vec<String>,
}
