use clap::Args;
use std::path::PathBuf;

use crate::generator::generate_declarations;

#[derive(Args, Debug, Clone)]
pub struct PatchArgs {
    /// Swagger schema JSON file
    #[arg(long = "schema", value_name = "SCHEMA_JSON")]
    pub schema: PathBuf,
    /// Generated declaration tree JSON file
    #[arg(long = "decls", value_name = "DECLS_JSON")]
    pub decls: PathBuf,
    /// Output declaration file; stdout when omitted
    #[arg(long = "out", value_name = "OUT_PATH")]
    pub out: Option<PathBuf>,
    /// Also print the unpatched declaration rendering
    #[arg(long = "print-original")]
    pub print_original: bool,
}

pub fn run(args: PatchArgs) -> i32 {
    match generate_declarations(
        &args.schema,
        &args.decls,
        args.out.as_deref(),
        args.print_original,
    ) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
