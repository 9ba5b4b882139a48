//! Console demonstration for the fab pattern catalog.
//!
//! Every subcommand resolves products through the registries; printing the
//! results is this binary's whole job, the library crates never print.

use std::sync::Once;

use fab_products::{families, payments, shapes, Dimensions, FamilyFactory};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing when `RUST_LOG` is set. Safe to call multiple times.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "demo" => run_demo(),
        "area" => run_area(&args[2..]),
        "pay" => run_pay(&args[2..]),
        "tags" => print_tags(),
        other => {
            eprintln!("error: unknown command `{other}`");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Walk through every family and variant, like the source teaching demos.
fn run_demo() {
    let Some(shape_registry) = or_exit(families().create("Shape")).as_shapes() else {
        eprintln!("error: Shape family did not produce a shape registry");
        std::process::exit(1);
    };

    for (tag, label, dims) in [
        ("Circle", "circle", Dimensions::radius(2.0)),
        ("Rectangle", "rectangle", Dimensions::sides(2.0, 3.0)),
        ("Triangle", "triangle", Dimensions::base(2.0, 3.0)),
        ("Ellipse", "ellipse", Dimensions::axes(3.0, 2.0)),
    ] {
        let shape = or_exit(shape_registry.create(tag));
        let area = or_exit(shape.area(&dims));
        println!("This is a {label}, its area is: {area}");
    }

    let Some(color_registry) = or_exit(families().create("Color")).as_colors() else {
        eprintln!("error: Color family did not produce a color registry");
        std::process::exit(1);
    };

    for (tag, label) in [("Red", "red"), ("Blue", "blue"), ("Black", "black")] {
        let color = or_exit(color_registry.create(tag));
        println!("My color is: {}", color.color(label));
    }

    for method in ["yu_e_bao", "zhifubao", "Wechat"] {
        let payment = or_exit(payments().create(method));
        println!("{}", payment.pay(100.0));
    }
}

fn run_area(args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: fab area <shape> <dims..>");
        eprintln!();
        eprintln!("Shapes:");
        eprintln!("  Circle <radius>");
        eprintln!("  Rectangle <length> <width>");
        eprintln!("  Triangle <base> <height>");
        eprintln!("  Ellipse <semi_major> <semi_minor>");
        std::process::exit(1);
    }

    let tag = args[0].as_str();
    let shape = or_exit(shapes().create(tag));
    let values = parse_values(&args[1..]);
    let Some(dims) = dims_for(tag, &values) else {
        eprintln!("error: wrong number of dimensions for `{tag}`");
        std::process::exit(1);
    };
    let area = or_exit(shape.area(&dims));
    println!("{tag} area: {area}");
}

fn run_pay(args: &[String]) {
    let [method, amount] = args else {
        eprintln!("Usage: fab pay <method> <amount>");
        std::process::exit(1);
    };

    let amount = match amount.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("error: `{amount}` is not a number");
            std::process::exit(1);
        }
    };

    let payment = or_exit(payments().create(method));
    println!("{}", payment.pay(amount));
}

fn print_tags() {
    for family_tag in families().tags() {
        let handle = or_exit(families().create(family_tag));
        let tags = match handle {
            FamilyFactory::Shapes(reg) => reg.tags(),
            FamilyFactory::Colors(reg) => reg.tags(),
        };
        println!("{family_tag}: {}", tags.join(", "));
    }
    // Payments sit outside the two-level producer, as in the source demos.
    println!("payment: {}", payments().tags().join(", "));
}

/// Map the CLI's positional dimensions onto the shape's expected variant.
fn dims_for(tag: &str, values: &[f64]) -> Option<Dimensions> {
    match (tag, values) {
        ("Circle", [radius]) => Some(Dimensions::radius(*radius)),
        ("Rectangle", [length, width]) => Some(Dimensions::sides(*length, *width)),
        ("Triangle", [base, height]) => Some(Dimensions::base(*base, *height)),
        ("Ellipse", [semi_major, semi_minor]) => Some(Dimensions::axes(*semi_major, *semi_minor)),
        _ => None,
    }
}

fn parse_values(args: &[String]) -> Vec<f64> {
    args.iter()
        .map(|arg| match arg.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("error: `{arg}` is not a number");
                std::process::exit(1);
            }
        })
        .collect()
}

fn or_exit<T>(result: Result<T, impl std::fmt::Display>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: fab <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  demo                    Walk through every family and variant");
    eprintln!("  area <shape> <dims..>   Construct a shape and print its area");
    eprintln!("  pay <method> <amount>   Route an amount through a payment method");
    eprintln!("  tags                    List supported tags per family");
}
