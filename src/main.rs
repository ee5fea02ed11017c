use stencil::{
    cli::{get_log_level_from_verbose, parse_args, run},
    error::default_error_handler,
    origin,
};

fn main() {
    let args = parse_args();

    let lvl = get_log_level_from_verbose(args.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    // Ambient process state is captured once here and passed down.
    let dispatch_result = origin::resolve().and_then(|context| run(args, context));

    if let Err(err) = dispatch_result {
        default_error_handler(err);
    }
}
