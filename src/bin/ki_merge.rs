use kimerge::{
    lines::{write_file, Result},
    symlib::merge::merge_files,
};
use std::env;

fn main() -> Result<()> {
    let usage = "usage: ki_merge output_file input_file...";
    let mut args = env::args();
    let _exec = args.next().ok_or(usage)?;
    let output = args.next().ok_or(usage)?;
    let inputs: Vec<String> = args.collect();
    if inputs.is_empty() {
        Err(usage)?
    }

    let library = merge_files(&inputs);
    write_file(&output, &library)?;

    println!("\nMerged {} symbols into {}", library.len(), output);
    Ok(())
}
