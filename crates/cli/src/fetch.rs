pub(crate) mod client;
pub(crate) mod error;

use crate::cli::FetchArgs;
use crate::cli::PathExt;
use crate::error::CliError;
use crate::fetch::client::DatasetClient;

pub(crate) fn fetch(args: FetchArgs) -> Result<(), CliError> {
    let path = args.path.or_current_dir()?;
    let target = path.join(&args.file_name);

    let client = DatasetClient::new();
    let bytes = client.download(&args.url, &target)?;

    println!(
        "skychart stored {bytes} bytes of weather data in `{}`",
        target.display()
    );

    Ok(())
}
