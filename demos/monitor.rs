use std::env;
use std::time::Duration;

use melzone_colibri::ColibriController;

#[tokio::main]
async fn main() -> melzone_colibri::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let base_url = args.get(1).expect("usage: monitor <base-url> [zones]");
    let zones: u16 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(3);

    let mut controller = ColibriController::builder(base_url)
        .zone_count(zones)
        .build();

    println!("Polling {zones} zones at {base_url}...");
    loop {
        for device in controller.zones_mut() {
            match device.refresh().await {
                Ok(()) => {
                    if let Some(reading) = device.reading() {
                        println!(
                            "[{}] {:.1}\u{00b0}C -> {:.1}\u{00b0}C | mode: {:?} | {}",
                            device.name(),
                            reading.room_temperature,
                            reading.target_temperature,
                            reading.mode,
                            if reading.power { "on" } else { "off" },
                        );
                    }
                }
                Err(e) => eprintln!("[{}] refresh error: {e}", device.name()),
            }
        }
        tokio::time::sleep(Duration::from_secs(10)).await;
    }
}
