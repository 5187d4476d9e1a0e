//! avcreate's entry point.
//! Parses arguments, runs the question pipeline and materializes the project.

use avcreate::{
    cli::{get_args, Args},
    config::ScaffoldConfig,
    constants::{AARDVARK_REACT, AARDVARK_SHARED},
    error::{default_error_handler, Result},
    filesystem::LocalFilesystem,
    metadata::read_package_metadata,
    parser::{get_answers, get_answers_from},
    processor::Processor,
    prompt::{DialoguerPrompter, PreloadedPrompter},
    question::gadget_questions,
    template::catalog,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// # Flow
/// 1. Reads the bundled package metadata
/// 2. Asks the gadget questions, starting from any preloaded answers
/// 3. Writes every missing catalog entry under the output directory
fn run(args: Args) -> Result<()> {
    let metadata = read_package_metadata()?;
    let config = ScaffoldConfig::from_metadata(&metadata)?;
    println!("Aardvark gadget project create script ({})", config.tool_version);

    let preloaded_answers = get_answers_from(args.stdin)?;
    let interactive = DialoguerPrompter::new();
    let prompt = PreloadedPrompter::new(&interactive, preloaded_answers);
    let answers = get_answers(&prompt, &gadget_questions())?;

    println!("Your answers: {}", answers.to_value()?);
    println!(
        "Using {}@{} and {}@{}",
        AARDVARK_REACT, config.react_version, AARDVARK_SHARED, config.shared_version
    );

    if !args.output_dir.exists() {
        std::fs::create_dir_all(&args.output_dir)?;
    }

    let fs = LocalFilesystem::new();
    let processor = Processor::new(&fs, &config, &args.output_dir, &answers)?;
    processor.materialize_with(&catalog(), |action| println!("{}", action))?;

    println!("Gadget project ready in {}.", args.output_dir.display());
    Ok(())
}
