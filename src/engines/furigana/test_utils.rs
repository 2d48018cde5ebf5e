//! A tiny IPADIC-shaped dictionary for tests.

use std::fs;
use std::path::Path;

use vibrato::{Dictionary, SystemDictionaryBuilder};

pub const LEX_CSV: &str = "\
囲碁,0,0,100,名詞,一般,*,*,*,*,囲碁,イゴ,イゴ
は,0,0,100,助詞,係助詞,*,*,*,*,は,ハ,ワ
楽しい,0,0,100,形容詞,自立,*,*,形容詞・イ段,基本形,楽しい,タノシイ,タノシイ
。,0,0,100,記号,句点,*,*,*,*,。,。,。
お正月,0,0,100,名詞,一般,*,*,*,*,お正月,オショウガツ,オショーガツ
へ,0,0,100,助詞,格助詞,一般,*,*,*,へ,ヘ,エ
旅立っ,0,0,100,動詞,自立,*,*,五段・タ行,連用タ接続,旅立つ,タビダッ,タビダッ
た,0,0,100,助動詞,*,*,*,特殊・タ,基本形,た,タ,タ
よ,0,0,100,助詞,終助詞,*,*,*,*,よ,ヨ,ヨ
FUJI,0,0,100,名詞,固有名詞,組織,*,*,*,*
カラー,0,0,100,名詞,一般,*,*,*,*,カラー,カラー,カラー
で,0,0,100,助詞,格助詞,一般,*,*,*,で,デ,デ
１,0,0,100,名詞,数,*,*,*,*,１,イチ,イチ
";

pub const MATRIX_DEF: &str = "1 1\n0 0 0\n";

pub const CHAR_DEF: &str = "\
DEFAULT 0 1 0
SPACE 0 1 0
ALPHA 0 1 0
NUMERIC 0 1 0
HIRAGANA 0 1 0
KATAKANA 0 1 0
KANJI 0 0 2
0x0020 SPACE
0x0041..0x005A ALPHA
0x0061..0x007A ALPHA
0xFF10..0xFF19 NUMERIC
0x3041..0x309F HIRAGANA
0x30A1..0x30FF KATAKANA
0x4E00..0x9FFF KANJI
";

pub const UNK_DEF: &str = "\
DEFAULT,0,0,10000,記号,一般,*,*,*,*,*
SPACE,0,0,100,記号,空白,*,*,*,*,*
ALPHA,0,0,10000,名詞,固有名詞,組織,*,*,*,*
NUMERIC,0,0,10000,名詞,数,*,*,*,*,*
HIRAGANA,0,0,10000,名詞,一般,*,*,*,*,*
KATAKANA,0,0,10000,名詞,一般,*,*,*,*,*
KANJI,0,0,10000,名詞,一般,*,*,*,*,*
";

pub fn test_dictionary() -> Dictionary {
    SystemDictionaryBuilder::from_readers(
        LEX_CSV.as_bytes(),
        MATRIX_DEF.as_bytes(),
        CHAR_DEF.as_bytes(),
        UNK_DEF.as_bytes(),
    )
    .expect("test dictionary should compile")
}

pub fn write_mecab_sources(dir: &Path) {
    fs::write(dir.join("lex.csv"), LEX_CSV).unwrap();
    fs::write(dir.join("matrix.def"), MATRIX_DEF).unwrap();
    fs::write(dir.join("char.def"), CHAR_DEF).unwrap();
    fs::write(dir.join("unk.def"), UNK_DEF).unwrap();
}
