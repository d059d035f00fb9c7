// Generated from ScriptExtensions-10.0.0.txt
// (Unicode Character Database, https://unicode.org/Public/UNIDATA/ScriptExtensions.txt).
// Do not edit by hand.
//
// The i-th boundary in RANGES marks the first code point covered by the
// i-th entry in VALUES; the range ends just before the next boundary.
// Code points with no listed value fall back to their plain Script
// property, recorded here as None.

/// Range start boundaries, strictly increasing, first element 0
pub static RANGES: &[u32] = &[
    0x0000, // ..0x0341
    0x0342, // ..0x0342
    0x0343, // ..0x0344
    0x0345, // ..0x0345
    0x0346, // ..0x0362
    0x0363, // ..0x036F
    0x0370, // ..0x0482
    0x0483, // ..0x0483
    0x0484, // ..0x0484
    0x0485, // ..0x0486
    0x0487, // ..0x0487
    0x0488, // ..0x0588
    0x0589, // ..0x0589
    0x058A, // ..0x060B
    0x060C, // ..0x060C
    0x060D, // ..0x061A
    0x061B, // ..0x061C
    0x061D, // ..0x061E
    0x061F, // ..0x061F
    0x0620, // ..0x063F
    0x0640, // ..0x0640
    0x0641, // ..0x064A
    0x064B, // ..0x0655
    0x0656, // ..0x065F
    0x0660, // ..0x0669
    0x066A, // ..0x066F
    0x0670, // ..0x0670
    0x0671, // ..0x0950
    0x0951, // ..0x0951
    0x0952, // ..0x0952
    0x0953, // ..0x0963
    0x0964, // ..0x0964
    0x0965, // ..0x0965
    0x0966, // ..0x096F
    0x0970, // ..0x09E5
    0x09E6, // ..0x09EF
    0x09F0, // ..0x0A65
    0x0A66, // ..0x0A6F
    0x0A70, // ..0x0AE5
    0x0AE6, // ..0x0AEF
    0x0AF0, // ..0x0BA9
    0x0BAA, // ..0x0BAA
    0x0BAB, // ..0x0BB4
    0x0BB5, // ..0x0BB5
    0x0BB6, // ..0x0BE5
    0x0BE6, // ..0x0BF2
    0x0BF3, // ..0x103F
    0x1040, // ..0x1049
    0x104A, // ..0x10FA
    0x10FB, // ..0x10FB
    0x10FC, // ..0x1734
    0x1735, // ..0x1736
    0x1737, // ..0x1801
    0x1802, // ..0x1803
    0x1804, // ..0x1804
    0x1805, // ..0x1805
    0x1806, // ..0x1CCF
    0x1CD0, // ..0x1CD0
    0x1CD1, // ..0x1CD1
    0x1CD2, // ..0x1CD3
    0x1CD4, // ..0x1CD6
    0x1CD7, // ..0x1CD7
    0x1CD8, // ..0x1CD8
    0x1CD9, // ..0x1CD9
    0x1CDA, // ..0x1CDA
    0x1CDB, // ..0x1CDB
    0x1CDC, // ..0x1CDD
    0x1CDE, // ..0x1CDF
    0x1CE0, // ..0x1CE0
    0x1CE1, // ..0x1CF1
    0x1CF2, // ..0x1CF4
    0x1CF5, // ..0x1CF5
    0x1CF6, // ..0x1CF6
    0x1CF7, // ..0x1CF7
    0x1CF8, // ..0x1CF9
    0x1CFA, // ..0x1DBF
    0x1DC0, // ..0x1DC1
    0x1DC2, // ..0x20EF
    0x20F0, // ..0x20F0
    0x20F1, // ..0x2E42
    0x2E43, // ..0x2E43
    0x2E44, // ..0x3000
    0x3001, // ..0x3002
    0x3003, // ..0x3003
    0x3004, // ..0x3005
    0x3006, // ..0x3006
    0x3007, // ..0x3007
    0x3008, // ..0x3011
    0x3012, // ..0x3012
    0x3013, // ..0x3013
    0x3014, // ..0x301B
    0x301C, // ..0x301F
    0x3020, // ..0x3029
    0x302A, // ..0x302D
    0x302E, // ..0x302F
    0x3030, // ..0x3030
    0x3031, // ..0x3035
    0x3036, // ..0x3036
    0x3037, // ..0x3037
    0x3038, // ..0x303B
    0x303C, // ..0x303D
    0x303E, // ..0x303F
    0x3040, // ..0x3098
    0x3099, // ..0x309C
    0x309D, // ..0x309F
    0x30A0, // ..0x30A0
    0x30A1, // ..0x30FA
    0x30FB, // ..0x30FB
    0x30FC, // ..0x30FC
    0x30FD, // ..0x318F
    0x3190, // ..0x319F
    0x31A0, // ..0x31BF
    0x31C0, // ..0x31E3
    0x31E4, // ..0x321F
    0x3220, // ..0x3247
    0x3248, // ..0x327F
    0x3280, // ..0x32B0
    0x32B1, // ..0x32BF
    0x32C0, // ..0x32CB
    0x32CC, // ..0x3357
    0x3358, // ..0x3370
    0x3371, // ..0x337A
    0x337B, // ..0x337F
    0x3380, // ..0x33DF
    0x33E0, // ..0x33FE
    0x33FF, // ..0xA66E
    0xA66F, // ..0xA66F
    0xA670, // ..0xA82F
    0xA830, // ..0xA835
    0xA836, // ..0xA839
    0xA83A, // ..0xA8F0
    0xA8F1, // ..0xA8F1
    0xA8F2, // ..0xA8F2
    0xA8F3, // ..0xA8F3
    0xA8F4, // ..0xA92D
    0xA92E, // ..0xA92E
    0xA92F, // ..0xA9CE
    0xA9CF, // ..0xA9CF
    0xA9D0, // ..0xFDF1
    0xFDF2, // ..0xFDF2
    0xFDF3, // ..0xFDFC
    0xFDFD, // ..0xFDFD
    0xFDFE, // ..0xFE44
    0xFE45, // ..0xFE46
    0xFE47, // ..0xFF60
    0xFF61, // ..0xFF65
    0xFF66, // ..0xFF6F
    0xFF70, // ..0xFF70
    0xFF71, // ..0xFF9D
    0xFF9E, // ..0xFF9F
    0xFFA0, // ..0x100FF
    0x10100, // ..0x10102
    0x10103, // ..0x10106
    0x10107, // ..0x10133
    0x10134, // ..0x10136
    0x10137, // ..0x1013F
    0x10140, // ..0x102DF
    0x102E0, // ..0x102FB
    0x102FC, // ..0x11300
    0x11301, // ..0x11301
    0x11302, // ..0x11302
    0x11303, // ..0x11303
    0x11304, // ..0x1133B
    0x1133C, // ..0x1133C
    0x1133D, // ..0x1BC9F
    0x1BCA0, // ..0x1BCA3
    0x1BCA4, // ..0x1D35F
    0x1D360, // ..0x1D371
    0x1D372, // ..0x1F24F
    0x1F250, // ..0x1F251
    0x1F252, // ..0x10FFFF
];

/// Script sets paired with [`RANGES`], same length
pub static VALUES: &[Option<&[&str]>] = &[
    None, // 0x0000..0x0341
    Some(&["Grek"]), // 0x0342..0x0342
    None, // 0x0343..0x0344
    Some(&["Grek"]), // 0x0345..0x0345
    None, // 0x0346..0x0362
    Some(&["Latn"]), // 0x0363..0x036F
    None, // 0x0370..0x0482
    Some(&["Cyrl", "Perm"]), // 0x0483..0x0483
    Some(&["Cyrl", "Glag"]), // 0x0484..0x0484
    Some(&["Cyrl", "Latn"]), // 0x0485..0x0486
    Some(&["Cyrl", "Glag"]), // 0x0487..0x0487
    None, // 0x0488..0x0588
    Some(&["Armn", "Geor"]), // 0x0589..0x0589
    None, // 0x058A..0x060B
    Some(&["Arab", "Syrc", "Thaa"]), // 0x060C..0x060C
    None, // 0x060D..0x061A
    Some(&["Arab", "Syrc", "Thaa"]), // 0x061B..0x061C
    None, // 0x061D..0x061E
    Some(&["Arab", "Syrc", "Thaa"]), // 0x061F..0x061F
    None, // 0x0620..0x063F
    Some(&["Adlm", "Arab", "Mand", "Mani", "Phlp", "Syrc"]), // 0x0640..0x0640
    None, // 0x0641..0x064A
    Some(&["Arab", "Syrc"]), // 0x064B..0x0655
    None, // 0x0656..0x065F
    Some(&["Arab", "Thaa"]), // 0x0660..0x0669
    None, // 0x066A..0x066F
    Some(&["Arab", "Syrc"]), // 0x0670..0x0670
    None, // 0x0671..0x0950
    Some(&["Beng", "Deva", "Gran", "Gujr", "Guru", "Knda", "Latn", "Mlym", "Orya", "Shrd", "Taml", "Telu"]), // 0x0951..0x0951
    Some(&["Beng", "Deva", "Gran", "Gujr", "Guru", "Knda", "Latn", "Mlym", "Orya", "Taml", "Telu"]), // 0x0952..0x0952
    None, // 0x0953..0x0963
    Some(&["Beng", "Deva", "Gran", "Gujr", "Guru", "Knda", "Mahj", "Mlym", "Orya", "Sind", "Sinh", "Sylo", "Takr", "Taml", "Telu", "Tirh"]), // 0x0964..0x0964
    Some(&["Beng", "Deva", "Gran", "Gujr", "Guru", "Knda", "Limb", "Mahj", "Mlym", "Orya", "Sind", "Sinh", "Sylo", "Takr", "Taml", "Telu", "Tirh"]), // 0x0965..0x0965
    Some(&["Deva", "Kthi", "Mahj"]), // 0x0966..0x096F
    None, // 0x0970..0x09E5
    Some(&["Beng", "Cakm", "Sylo"]), // 0x09E6..0x09EF
    None, // 0x09F0..0x0A65
    Some(&["Guru", "Mult"]), // 0x0A66..0x0A6F
    None, // 0x0A70..0x0AE5
    Some(&["Gujr", "Khoj"]), // 0x0AE6..0x0AEF
    None, // 0x0AF0..0x0BA9
    Some(&["Gran", "Taml"]), // 0x0BAA..0x0BAA
    None, // 0x0BAB..0x0BB4
    Some(&["Gran", "Taml"]), // 0x0BB5..0x0BB5
    None, // 0x0BB6..0x0BE5
    Some(&["Gran", "Taml"]), // 0x0BE6..0x0BF2
    None, // 0x0BF3..0x103F
    Some(&["Cakm", "Mymr", "Tale"]), // 0x1040..0x1049
    None, // 0x104A..0x10FA
    Some(&["Geor", "Latn"]), // 0x10FB..0x10FB
    None, // 0x10FC..0x1734
    Some(&["Buhd", "Hano", "Tagb", "Tglg"]), // 0x1735..0x1736
    None, // 0x1737..0x1801
    Some(&["Mong", "Phag"]), // 0x1802..0x1803
    None, // 0x1804..0x1804
    Some(&["Mong", "Phag"]), // 0x1805..0x1805
    None, // 0x1806..0x1CCF
    Some(&["Deva", "Gran"]), // 0x1CD0..0x1CD0
    Some(&["Deva"]), // 0x1CD1..0x1CD1
    Some(&["Deva", "Gran"]), // 0x1CD2..0x1CD3
    Some(&["Deva"]), // 0x1CD4..0x1CD6
    Some(&["Deva", "Shrd"]), // 0x1CD7..0x1CD7
    Some(&["Deva"]), // 0x1CD8..0x1CD8
    Some(&["Deva", "Shrd"]), // 0x1CD9..0x1CD9
    Some(&["Deva", "Knda", "Mlym", "Taml", "Telu"]), // 0x1CDA..0x1CDA
    Some(&["Deva"]), // 0x1CDB..0x1CDB
    Some(&["Deva", "Shrd"]), // 0x1CDC..0x1CDD
    Some(&["Deva"]), // 0x1CDE..0x1CDF
    Some(&["Deva", "Shrd"]), // 0x1CE0..0x1CE0
    Some(&["Deva"]), // 0x1CE1..0x1CF1
    Some(&["Deva", "Gran"]), // 0x1CF2..0x1CF4
    Some(&["Deva", "Knda"]), // 0x1CF5..0x1CF5
    Some(&["Deva"]), // 0x1CF6..0x1CF6
    Some(&["Beng"]), // 0x1CF7..0x1CF7
    Some(&["Deva", "Gran"]), // 0x1CF8..0x1CF9
    None, // 0x1CFA..0x1DBF
    Some(&["Grek"]), // 0x1DC0..0x1DC1
    None, // 0x1DC2..0x20EF
    Some(&["Deva", "Gran", "Latn"]), // 0x20F0..0x20F0
    None, // 0x20F1..0x2E42
    Some(&["Cyrl", "Glag"]), // 0x2E43..0x2E43
    None, // 0x2E44..0x3000
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana", "Yiii"]), // 0x3001..0x3002
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana"]), // 0x3003..0x3003
    None, // 0x3004..0x3005
    Some(&["Hani"]), // 0x3006..0x3006
    None, // 0x3007..0x3007
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana", "Yiii"]), // 0x3008..0x3011
    None, // 0x3012..0x3012
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana"]), // 0x3013..0x3013
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana", "Yiii"]), // 0x3014..0x301B
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana"]), // 0x301C..0x301F
    None, // 0x3020..0x3029
    Some(&["Bopo", "Hani"]), // 0x302A..0x302D
    None, // 0x302E..0x302F
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana"]), // 0x3030..0x3030
    Some(&["Hira", "Kana"]), // 0x3031..0x3035
    None, // 0x3036..0x3036
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana"]), // 0x3037..0x3037
    None, // 0x3038..0x303B
    Some(&["Hani", "Hira", "Kana"]), // 0x303C..0x303D
    Some(&["Hani"]), // 0x303E..0x303F
    None, // 0x3040..0x3098
    Some(&["Hira", "Kana"]), // 0x3099..0x309C
    None, // 0x309D..0x309F
    Some(&["Hira", "Kana"]), // 0x30A0..0x30A0
    None, // 0x30A1..0x30FA
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana", "Yiii"]), // 0x30FB..0x30FB
    Some(&["Hira", "Kana"]), // 0x30FC..0x30FC
    None, // 0x30FD..0x318F
    Some(&["Hani"]), // 0x3190..0x319F
    None, // 0x31A0..0x31BF
    Some(&["Hani"]), // 0x31C0..0x31E3
    None, // 0x31E4..0x321F
    Some(&["Hani"]), // 0x3220..0x3247
    None, // 0x3248..0x327F
    Some(&["Hani"]), // 0x3280..0x32B0
    None, // 0x32B1..0x32BF
    Some(&["Hani"]), // 0x32C0..0x32CB
    None, // 0x32CC..0x3357
    Some(&["Hani"]), // 0x3358..0x3370
    None, // 0x3371..0x337A
    Some(&["Hani"]), // 0x337B..0x337F
    None, // 0x3380..0x33DF
    Some(&["Hani"]), // 0x33E0..0x33FE
    None, // 0x33FF..0xA66E
    Some(&["Cyrl", "Glag"]), // 0xA66F..0xA66F
    None, // 0xA670..0xA82F
    Some(&["Deva", "Gujr", "Guru", "Knda", "Kthi", "Mahj", "Modi", "Sind", "Takr", "Tirh"]), // 0xA830..0xA835
    Some(&["Deva", "Gujr", "Guru", "Kthi", "Mahj", "Modi", "Sind", "Takr", "Tirh"]), // 0xA836..0xA839
    None, // 0xA83A..0xA8F0
    Some(&["Beng", "Deva"]), // 0xA8F1..0xA8F1
    None, // 0xA8F2..0xA8F2
    Some(&["Deva", "Taml"]), // 0xA8F3..0xA8F3
    None, // 0xA8F4..0xA92D
    Some(&["Kali", "Latn", "Mymr"]), // 0xA92E..0xA92E
    None, // 0xA92F..0xA9CE
    Some(&["Bugi", "Java"]), // 0xA9CF..0xA9CF
    None, // 0xA9D0..0xFDF1
    Some(&["Arab", "Thaa"]), // 0xFDF2..0xFDF2
    None, // 0xFDF3..0xFDFC
    Some(&["Arab", "Thaa"]), // 0xFDFD..0xFDFD
    None, // 0xFDFE..0xFE44
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana"]), // 0xFE45..0xFE46
    None, // 0xFE47..0xFF60
    Some(&["Bopo", "Hang", "Hani", "Hira", "Kana", "Yiii"]), // 0xFF61..0xFF65
    None, // 0xFF66..0xFF6F
    Some(&["Hira", "Kana"]), // 0xFF70..0xFF70
    None, // 0xFF71..0xFF9D
    Some(&["Hira", "Kana"]), // 0xFF9E..0xFF9F
    None, // 0xFFA0..0x100FF
    Some(&["Cprt", "Linb"]), // 0x10100..0x10102
    None, // 0x10103..0x10106
    Some(&["Cprt", "Lina", "Linb"]), // 0x10107..0x10133
    None, // 0x10134..0x10136
    Some(&["Cprt", "Linb"]), // 0x10137..0x1013F
    None, // 0x10140..0x102DF
    Some(&["Arab", "Copt"]), // 0x102E0..0x102FB
    None, // 0x102FC..0x11300
    Some(&["Gran", "Taml"]), // 0x11301..0x11301
    None, // 0x11302..0x11302
    Some(&["Gran", "Taml"]), // 0x11303..0x11303
    None, // 0x11304..0x1133B
    Some(&["Gran", "Taml"]), // 0x1133C..0x1133C
    None, // 0x1133D..0x1BC9F
    Some(&["Dupl"]), // 0x1BCA0..0x1BCA3
    None, // 0x1BCA4..0x1D35F
    Some(&["Hani"]), // 0x1D360..0x1D371
    None, // 0x1D372..0x1F24F
    Some(&["Hani"]), // 0x1F250..0x1F251
    None, // 0x1F252..0x10FFFF
];
