use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

const PROVIDERS: [&str; 3] = ["stripe", "braintree", "paypal"];

pub fn generate_orders_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["provider", "amount"])?;

    let mut rng = rand::thread_rng();
    for _ in 0..rows {
        let provider = PROVIDERS[rng.gen_range(0..PROVIDERS.len())];
        // No amount validation exists downstream, so negatives and zero are
        // legitimate inputs.
        let amount: i64 = rng.gen_range(-100..1000);
        wtr.write_record([provider, &amount.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
