//! ferrite-conv demo
//!
//! Rasterizes a tic-tac-toe position, runs it through two rounds of
//! correlation, activation and pooling, and prints every feature map.
//!
//! Run with:
//!   cargo run -- [--spec spec.json] [--write-spec out.json] [--image photo.jpg]
//!
//! Without `--spec` the stock 5×5 board is used. `--image` additionally runs
//! the Sobel edge detectors over a grayscale copy of the photograph.

use std::process::ExitCode;

use ferrite_conv::{
    image_bytes_to_grayscale, run_pipeline, sobel_edges, FeatureMap, PipelineSpec, Result,
};

#[derive(Debug, Default)]
struct Args {
    spec: Option<String>,
    write_spec: Option<String>,
    image: Option<String>,
}

fn parse_args() -> std::result::Result<Args, String> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);

    while let Some(flag) = it.next() {
        let slot = match flag.as_str() {
            "--spec" => &mut args.spec,
            "--write-spec" => &mut args.write_spec,
            "--image" => &mut args.image,
            other => return Err(format!("unknown argument '{}'", other)),
        };
        match it.next() {
            Some(value) => *slot = Some(value),
            None => return Err(format!("{} expects a value", flag)),
        }
    }

    Ok(args)
}

fn print_maps(title: &str, maps: &[FeatureMap]) {
    println!("── {} ──", title);
    for fm in maps {
        println!("[{}] {}x{}", fm.name, fm.map.rows, fm.map.cols);
        print!("{}", fm.map);
    }
    println!();
}

fn run(args: &Args) -> Result<()> {
    let spec = match &args.spec {
        Some(path) => PipelineSpec::load_json(path)?,
        None => PipelineSpec::default(),
    };

    if let Some(path) = &args.write_spec {
        spec.save_json(path)?;
        println!("Wrote pipeline spec to {}", path);
    }

    let report = run_pipeline(&spec)?;

    println!(
        "Board {}x{} ({} X, {} O)",
        spec.board.width,
        spec.board.height,
        spec.board.x_marks.len(),
        spec.board.o_marks.len()
    );
    print!("{}", report.board);
    println!();

    print_maps("layer 1", &report.layer1);
    print_maps("layer 1 pooled", &report.layer1_pooled);
    print_maps("layer 2 (x)", &report.layer2_x);
    print_maps("layer 2 (o)", &report.layer2_o);
    print_maps("layer 2 (x) activated", &report.layer2_x_activated);
    print_maps("layer 2 (o) activated", &report.layer2_o_activated);

    if let Some(path) = &args.image {
        let bytes = std::fs::read(path)?;
        let img = image_bytes_to_grayscale(&bytes, spec.image_size, spec.image_size)?;
        println!("Image {} resized to {}x{}", path, img.cols, img.rows);
        print_maps("sobel", &sobel_edges(&img)?);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: ferrite-conv [--spec FILE] [--write-spec FILE] [--image FILE]");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
