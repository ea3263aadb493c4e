//! Reproduces the walkthrough from the original C reference implementation: compress a short,
//! highly repetitive string, hex-dump the block, decompress it, and print the result back out.

const SSSS: &str = "She sells sea shells by the sea shore.\n\
The shells she sells are surely seashells.\n\
So if she sells shells on the seashore,\n\
I'm sure she sells seashore shells.\n";

fn main() {
    let input = SSSS.as_bytes();

    let cap = lz4_block::max_compressed_len(input.len()).expect("input is too long");
    let mut encoded = vec![0u8; cap];
    let encoded_len =
        lz4_block::compress_into(&mut encoded, input).expect("compress_into failed");
    encoded.truncate(encoded_len);

    println!("Encoded {} bytes as {} bytes:", input.len(), encoded_len);
    for (i, chunk) in encoded.chunks(8).enumerate() {
        let prefix = if i == 0 { "    " } else { "" };
        let line: Vec<String> = chunk.iter().map(|b| format!("0x{:02X},", b)).collect();
        println!("{}{}{}", prefix, if i == 0 { "" } else { "    " }, line.join(" "));
    }

    let mut decoded = vec![0u8; input.len()];
    let decoded_len =
        lz4_block::decompress_into(&mut decoded, &encoded).expect("decompress_into failed");

    println!("\nDecoded {} bytes as {} bytes:", encoded_len, decoded_len);
    print!("{}", String::from_utf8_lossy(&decoded[..decoded_len]));
}
