use miette::{IntoDiagnostic, Result};
use tspaths_core::version::VersionInfo;

pub fn run(json: bool) -> Result<()> {
    let info = VersionInfo::current();
    if json {
        println!("{}", serde_json::to_string_pretty(&info).into_diagnostic()?);
    } else {
        println!("{info}");
    }
    Ok(())
}
