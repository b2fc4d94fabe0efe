use clap::{arg, crate_version, Command};
use lzwstream::Lzw20;
use std::io::{Read, Write};

const RCH: &str = "unreachable was reached";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let long_help =
"Examples:
---------
Compress:      `lzwstream e -i my_file -o my_file.lzw`
Expand:        `lzwstream d -i my_file.lzw -o my_file`";

    let mut main_cmd = Command::new("lzwstream")
        .about("Streaming LZW compress/expand, raw header-less code stream")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("e")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .about("compress a file"));
    main_cmd = main_cmd.subcommand(Command::new("d")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .about("expand a file"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("e") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let mut input = std::fs::File::open(path_in)?;
        let output = std::fs::File::create(path_out)?;
        let mut enc = Lzw20::encoder(output);
        let mut buf = [0u8; 4096];
        loop {
            let n = input.read(&mut buf)?;
            if n == 0 {
                break;
            }
            enc.write_all(&buf[..n])?;
        }
        enc.finish()?;
    }

    if let Some(cmd) = matches.subcommand_matches("d") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let input = std::fs::File::open(path_in)?;
        let mut output = std::fs::File::create(path_out)?;
        let mut dec = Lzw20::decoder(input);
        let mut buf = [0u8; 4096];
        loop {
            let n = dec.read(&mut buf)?;
            if n == 0 {
                break;
            }
            output.write_all(&buf[..n])?;
        }
    }

    Ok(())
}
