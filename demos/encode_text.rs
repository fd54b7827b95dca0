use huffman_codec::bitstream::{decode, pack, unpack};
use huffman_codec::table::to_bit_string;
use huffman_codec::{CodeTable, FrequencyTable, HuffmanTree};

fn main() -> Result<(), huffman_codec::Error> {
    let s = String::from("Hello my name is Sam!");
    let tree = HuffmanTree::build(&FrequencyTable::analyze(s.chars()))?;
    let table = CodeTable::from_tree(&tree);

    for (sym, code) in table.iter() {
        println!("{sym:?} => {}", to_bit_string(code));
    }

    let packed = pack(&table.encode(s.chars())?);
    let dec: String = decode(&unpack(&packed)?, tree.root())?.into_iter().collect();

    println!("{} bytes -> {} bytes: {:?}", s.len(), packed.len(), dec);
    Ok(())
}
