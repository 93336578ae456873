use anyhow::Result;
use argp::FromArgs;
use vizdiff_client::decode_client_token;

#[derive(FromArgs, PartialEq, Eq, Debug)]
/// Decode a compact client token and print the connection parameters.
#[argp(subcommand, name = "decode")]
pub struct Args {
    #[argp(positional)]
    /// compact client token
    token: String,
}

pub fn run(args: Args) -> Result<()> {
    let params = decode_client_token(&args.token)?;
    println!("owner:           {}", params.owner);
    println!("repository:      {}", params.repository);
    println!("installation id: {}", params.installation_id);
    Ok(())
}
