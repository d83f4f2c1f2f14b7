// crates/booking-console/tests/console_session.rs
use booking_console::config::ConsoleConfig;
use booking_console::replay::replay;
use booking_console::{spawn_engine, Console};
use booking_core::BookingEngine;

async fn run_session(script: &str, config: ConsoleConfig) -> String {
    let (engine, engine_task) =
        spawn_engine(BookingEngine::with_prefix(config.booking_prefix.clone()));

    let mut console = Console::new(script.as_bytes(), Vec::new(), engine, config);
    console.run().await.expect("session runs to completion");
    let output = console.into_output();

    engine_task.await.expect("engine task exits cleanly");
    String::from_utf8(output).expect("console writes utf-8")
}

#[tokio::test]
async fn book_reseat_and_check_booking() {
    let script = "Inception 8 10\n1\n4\nB03\n\n2\nGIC0002\nGIC0001\n\n3\n";
    let out = run_session(script, ConsoleConfig::default()).await;

    assert!(out.contains("[1] Book tickets for Inception (80 seats available)"));
    assert!(out.contains("Successfully reserved 4 Inception tickets."));
    assert!(out.contains("Booking id: GIC0001\nSelected seats: A06 A07 A08 A09\n"));
    assert!(out.contains("A  .  .  .  .  .  O  O  O  O  .\n"));

    assert!(out.contains("Booking id: GIC0002\nSelected seats: B03 B04 B05 B06\n"));
    assert!(out.contains(
        "B  .  .  O  O  O  O  .  .  .  .\nA  .  .  .  .  .  .  .  .  .  .\n"
    ));
    assert!(out.contains("Booking id: GIC0002 confirmed."));
    assert!(out.contains("[1] Book tickets for Inception (76 seats available)"));

    assert!(out.contains("Booking ID GIC0001 not found."));
    assert!(out.ends_with("Thank you for using GIC Cinemas system. Bye!\n"));
}

#[tokio::test]
async fn invalid_input_reprompts() {
    let script = "Inception\nInception 27 10\nInception 8 10\n9\n1\nabc\n100\n\n3\n";
    let out = run_session(script, ConsoleConfig::default()).await;

    assert!(out.contains("Invalid input. Expected e.g. Inception 8 10"));
    assert!(out.contains("Rows must be between 1 and 26 and seats per row must be between 1 and 50"));
    assert!(out.contains("Invalid option. Please select 1, 2, or 3."));
    assert!(out.contains("Invalid number. Try again."));
    assert!(out.contains("Sorry, there are only 80 seats available."));
    assert_eq!(out.matches("(80 seats available)").count(), 3);
}

#[tokio::test]
async fn bad_seating_positions_keep_the_booking() {
    let script = "Inception 2 3\n1\n2\n??\nZ9\nB01\n\n3\n";
    let out = run_session(script, ConsoleConfig::default()).await;

    assert!(out.contains("Selected seats: A02 A03"));
    assert!(out.contains("Invalid seating position \"??\": invalid row letter '?' in seat label."));
    assert!(out.contains("Seat (row 25, column 8) is outside the seating map."));
    assert!(out.contains("Booking id: GIC0002\nSelected seats: B01 B02\n"));
    assert!(out.contains("Booking id: GIC0002 confirmed."));
    assert!(out.contains("(4 seats available)"));
}

#[tokio::test]
async fn end_of_input_exits_cleanly() {
    let out = run_session("Inception 8 10\n1\n2\n", ConsoleConfig::default()).await;

    assert!(out.contains("Selected seats: A06 A07"));
    assert!(out.ends_with("Thank you for using GIC Cinemas system. Bye!\n"));

    let out = run_session("", ConsoleConfig::default()).await;
    assert!(out.ends_with("Thank you for using GIC Cinemas system. Bye!\n"));
}

async fn run_session_bytes(script: &[u8]) -> anyhow::Result<String> {
    let (engine, engine_task) = spawn_engine(BookingEngine::new());

    let mut console = Console::new(script, Vec::new(), engine, ConsoleConfig::default());
    let result = console.run().await;
    let output = console.into_output();

    engine_task.await.expect("engine task exits cleanly");
    result.map(|()| String::from_utf8_lossy(&output).into_owned())
}

#[tokio::test]
async fn non_utf8_input_is_treated_as_invalid_and_reprompts() {
    let out = run_session_bytes(b"Inception 8 10\n\xff\n3\n")
        .await
        .expect("session survives a non-UTF-8 line");

    assert!(out.contains("Invalid option. Please select 1, 2, or 3."));
    assert!(out.ends_with("Thank you for using GIC Cinemas system. Bye!\n"));

    let out = run_session_bytes(b"Inception 8 10\r\n1\n\xfe2\n2\r\n\r\n3\n")
        .await
        .expect("session survives a non-UTF-8 ticket count");
    assert!(out.contains("Invalid number. Try again."));
    assert!(out.contains("Selected seats: A06 A07"));
    assert!(out.ends_with("Thank you for using GIC Cinemas system. Bye!\n"));
}

#[tokio::test]
async fn replay_skips_non_utf8_lines() {
    let script: &[u8] = b"I, Inception, 8, 10\nB, \xff4\nB, 2\r\nA\n";
    let (engine, engine_task) = spawn_engine(BookingEngine::new());

    let mut output = Vec::new();
    let processed = replay(script, &mut output, engine).await.unwrap();
    engine_task.await.unwrap();

    assert_eq!(processed, 3);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "I, Inception, 8, 10\nB, GIC0001, A06 A07\nA, 78\n"
    );
}

#[tokio::test]
async fn configuration_shapes_the_session() {
    let config = ConsoleConfig::from_toml_str(
        "brand = \"Riverside Picturehouse\"\nbooking_prefix = \"RPH\"\n\n[glyphs]\nselected = \"*\"\n",
    )
    .unwrap();
    let out = run_session("The Dark Knight 1 3\n1\n1\n\n3\n", config).await;

    assert!(out.contains("Welcome to Riverside Picturehouse"));
    assert!(out.contains("[1] Book tickets for The Dark Knight (3 seats available)"));
    assert!(out.contains("Booking id: RPH0001"));
    assert!(out.contains("A  .  *  .\n"));
    assert!(out.ends_with("Thank you for using Riverside Picturehouse system. Bye!\n"));
}

#[tokio::test]
async fn replay_writes_one_line_per_command() {
    let script = "# warm-up\nI, Inception, 8, 10\nB, 4\nnot a command\nB, 3, B03\nA\n";
    let (engine, engine_task) = spawn_engine(BookingEngine::new());

    let mut output = Vec::new();
    let processed = replay(script.as_bytes(), &mut output, engine).await.unwrap();
    engine_task.await.unwrap();

    assert_eq!(processed, 4);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "I, Inception, 8, 10\nB, GIC0001, A06 A07 A08 A09\nB, GIC0002, B03 B04 B05\nA, 73\n"
    );
}
