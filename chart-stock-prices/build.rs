use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy stock_data.csv to OUT_DIR for include_str
    let stock_src = Path::new("../fixtures/stock_data.csv");
    let stock_dest = Path::new(&out_dir).join("stock_data.csv");
    if stock_src.exists() {
        fs::copy(stock_src, &stock_dest).unwrap();
    } else {
        fs::write(
            &stock_dest,
            "Date,Company,Open,Close\n2023-11-01,Apple,170.77,173.97\n2023-11-02,Apple,175.52,177.57\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/stock_data.csv");
}
