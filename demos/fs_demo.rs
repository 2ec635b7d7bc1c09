//! Example demonstrating the in-memory filesystem
//!
//! This example seeds a small directory hierarchy through the command
//! handler and walks through the main operations.

use cli_console::commands::CommandHandler;

fn run(handler: &mut CommandHandler, line: &str) {
    match handler.execute(line) {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{}", output),
        Err(message) => println!("ERROR: {}", message),
    }
}

fn main() {
    println!("=== MemFS Demo ===\n");

    let mut handler = CommandHandler::new();

    println!("1. Creating directory structure...");
    run(&mut handler, "makedir Directory_1");
    run(&mut handler, "makedir Directory_2");
    run(&mut handler, "makedir Directory_3");
    run(&mut handler, "cd Directory_1");
    run(&mut handler, "makedir Directory_11");
    run(&mut handler, "makedir Directory_12");
    run(&mut handler, "cd Directory_11");
    run(&mut handler, "makedir Nested_Dir");
    run(&mut handler, "cd ~");

    println!("\n2. Creating binary files...");
    run(&mut handler, "cd Directory_2");
    run(&mut handler, "makebin Binary1 Here you can save information");
    run(&mut handler, "makebin Binary2 Random string of text");
    run(&mut handler, "cd ..");

    println!("\n3. Creating a log file and a buffer...");
    run(&mut handler, "cd Directory_3");
    run(&mut handler, "makebuf Buffer1");
    run(&mut handler, "makelog Log1 1 - Hello");
    run(&mut handler, "addlog Log1 2 - World");
    run(&mut handler, "cd ~");

    println!("\n4. Full tree:");
    run(&mut handler, "tree");

    println!("5. Reading files:");
    run(&mut handler, "read ./Directory_2/Binary1");
    run(&mut handler, "read ./Directory_3/Log1");

    println!("\n6. Buffer workflow:");
    run(&mut handler, "pushbuf ./Directory_3/Buffer1 first");
    run(&mut handler, "pushbuf ./Directory_3/Buffer1 second");
    run(&mut handler, "popbuf ./Directory_3/Buffer1");
    run(&mut handler, "popbuf ./Directory_3/Buffer1");

    println!("\n7. Moving and deleting:");
    run(&mut handler, "move ./Directory_3/Buffer1 ./Directory_1");
    run(&mut handler, "del ./Directory_2");
    run(&mut handler, "tree");

    println!("=== Demo Complete ===");
}
