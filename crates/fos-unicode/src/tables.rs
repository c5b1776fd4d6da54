// Generated from DerivedBidiClass.txt. Do not edit by hand.
// Unlisted code points default to L and are folded in so the ranges cover
// U+0000..=U+10FFFF without gaps.

use crate::BidiClass::{self, *};
use crate::BracketType;

pub(crate) const BIDI_CLASS_TABLE: &[(u32, u32, BidiClass)] = &[
    (0x0000, 0x0008, BN),
    (0x0009, 0x0009, S),
    (0x000A, 0x000A, B),
    (0x000B, 0x000B, S),
    (0x000C, 0x000C, WS),
    (0x000D, 0x000D, B),
    (0x000E, 0x001B, BN),
    (0x001C, 0x001E, B),
    (0x001F, 0x001F, S),
    (0x0020, 0x0020, WS),
    (0x0021, 0x0022, ON),
    (0x0023, 0x0025, ET),
    (0x0026, 0x002A, ON),
    (0x002B, 0x002B, ES),
    (0x002C, 0x002C, CS),
    (0x002D, 0x002D, ES),
    (0x002E, 0x002F, CS),
    (0x0030, 0x0039, EN),
    (0x003A, 0x003A, CS),
    (0x003B, 0x0040, ON),
    (0x0041, 0x005A, L),
    (0x005B, 0x0060, ON),
    (0x0061, 0x007A, L),
    (0x007B, 0x007E, ON),
    (0x007F, 0x0084, BN),
    (0x0085, 0x0085, B),
    (0x0086, 0x009F, BN),
    (0x00A0, 0x00A0, CS),
    (0x00A1, 0x00A1, ON),
    (0x00A2, 0x00A5, ET),
    (0x00A6, 0x00A9, ON),
    (0x00AA, 0x00AA, L),
    (0x00AB, 0x00AC, ON),
    (0x00AD, 0x00AD, BN),
    (0x00AE, 0x00AF, ON),
    (0x00B0, 0x00B1, ET),
    (0x00B2, 0x00B3, EN),
    (0x00B4, 0x00B4, ON),
    (0x00B5, 0x00B5, L),
    (0x00B6, 0x00B8, ON),
    (0x00B9, 0x00B9, EN),
    (0x00BA, 0x00BA, L),
    (0x00BB, 0x00BF, ON),
    (0x00C0, 0x00D6, L),
    (0x00D7, 0x00D7, ON),
    (0x00D8, 0x00F6, L),
    (0x00F7, 0x00F7, ON),
    (0x00F8, 0x02B8, L),
    (0x02B9, 0x02BA, ON),
    (0x02BB, 0x02C1, L),
    (0x02C2, 0x02CF, ON),
    (0x02D0, 0x02D1, L),
    (0x02D2, 0x02DF, ON),
    (0x02E0, 0x02E4, L),
    (0x02E5, 0x02ED, ON),
    (0x02EE, 0x02EE, L),
    (0x02EF, 0x02FF, ON),
    (0x0300, 0x036F, NSM),
    (0x0370, 0x0373, L),
    (0x0374, 0x0375, ON),
    (0x0376, 0x037D, L),
    (0x037E, 0x037E, ON),
    (0x037F, 0x0383, L),
    (0x0384, 0x0385, ON),
    (0x0386, 0x0386, L),
    (0x0387, 0x0387, ON),
    (0x0388, 0x03F5, L),
    (0x03F6, 0x03F6, ON),
    (0x03F7, 0x0482, L),
    (0x0483, 0x0489, NSM),
    (0x048A, 0x0589, L),
    (0x058A, 0x058A, ON),
    (0x058B, 0x058C, L),
    (0x058D, 0x058E, ON),
    (0x058F, 0x058F, ET),
    (0x0590, 0x0590, R),
    (0x0591, 0x05BD, NSM),
    (0x05BE, 0x05BE, R),
    (0x05BF, 0x05BF, NSM),
    (0x05C0, 0x05C0, R),
    (0x05C1, 0x05C2, NSM),
    (0x05C3, 0x05C3, R),
    (0x05C4, 0x05C5, NSM),
    (0x05C6, 0x05C6, R),
    (0x05C7, 0x05C7, NSM),
    (0x05C8, 0x05FF, R),
    (0x0600, 0x0605, AN),
    (0x0606, 0x0607, ON),
    (0x0608, 0x0608, AL),
    (0x0609, 0x060A, ET),
    (0x060B, 0x060B, AL),
    (0x060C, 0x060C, CS),
    (0x060D, 0x060D, AL),
    (0x060E, 0x060F, ON),
    (0x0610, 0x061A, NSM),
    (0x061B, 0x064A, AL),
    (0x064B, 0x065F, NSM),
    (0x0660, 0x0669, AN),
    (0x066A, 0x066A, ET),
    (0x066B, 0x066C, AN),
    (0x066D, 0x066F, AL),
    (0x0670, 0x0670, NSM),
    (0x0671, 0x06D5, AL),
    (0x06D6, 0x06DC, NSM),
    (0x06DD, 0x06DD, AN),
    (0x06DE, 0x06DE, ON),
    (0x06DF, 0x06E4, NSM),
    (0x06E5, 0x06E6, AL),
    (0x06E7, 0x06E8, NSM),
    (0x06E9, 0x06E9, ON),
    (0x06EA, 0x06ED, NSM),
    (0x06EE, 0x06EF, AL),
    (0x06F0, 0x06F9, EN),
    (0x06FA, 0x0710, AL),
    (0x0711, 0x0711, NSM),
    (0x0712, 0x072F, AL),
    (0x0730, 0x074A, NSM),
    (0x074B, 0x07A5, AL),
    (0x07A6, 0x07B0, NSM),
    (0x07B1, 0x07BF, AL),
    (0x07C0, 0x07EA, R),
    (0x07EB, 0x07F3, NSM),
    (0x07F4, 0x07F5, R),
    (0x07F6, 0x07F9, ON),
    (0x07FA, 0x07FC, R),
    (0x07FD, 0x07FD, NSM),
    (0x07FE, 0x0815, R),
    (0x0816, 0x0819, NSM),
    (0x081A, 0x081A, R),
    (0x081B, 0x0823, NSM),
    (0x0824, 0x0824, R),
    (0x0825, 0x0827, NSM),
    (0x0828, 0x0828, R),
    (0x0829, 0x082D, NSM),
    (0x082E, 0x0858, R),
    (0x0859, 0x085B, NSM),
    (0x085C, 0x085F, R),
    (0x0860, 0x088F, AL),
    (0x0890, 0x0891, AN),
    (0x0892, 0x0897, AL),
    (0x0898, 0x089F, NSM),
    (0x08A0, 0x08C9, AL),
    (0x08CA, 0x08E1, NSM),
    (0x08E2, 0x08E2, AN),
    (0x08E3, 0x0902, NSM),
    (0x0903, 0x0939, L),
    (0x093A, 0x093A, NSM),
    (0x093B, 0x093B, L),
    (0x093C, 0x093C, NSM),
    (0x093D, 0x0940, L),
    (0x0941, 0x0948, NSM),
    (0x0949, 0x094C, L),
    (0x094D, 0x094D, NSM),
    (0x094E, 0x0950, L),
    (0x0951, 0x0957, NSM),
    (0x0958, 0x0961, L),
    (0x0962, 0x0963, NSM),
    (0x0964, 0x0980, L),
    (0x0981, 0x0981, NSM),
    (0x0982, 0x09BB, L),
    (0x09BC, 0x09BC, NSM),
    (0x09BD, 0x09C0, L),
    (0x09C1, 0x09C4, NSM),
    (0x09C5, 0x09CC, L),
    (0x09CD, 0x09CD, NSM),
    (0x09CE, 0x09E1, L),
    (0x09E2, 0x09E3, NSM),
    (0x09E4, 0x09F1, L),
    (0x09F2, 0x09F3, ET),
    (0x09F4, 0x09FA, L),
    (0x09FB, 0x09FB, ET),
    (0x09FC, 0x09FD, L),
    (0x09FE, 0x09FE, NSM),
    (0x09FF, 0x0A00, L),
    (0x0A01, 0x0A02, NSM),
    (0x0A03, 0x0A3B, L),
    (0x0A3C, 0x0A3C, NSM),
    (0x0A3D, 0x0A40, L),
    (0x0A41, 0x0A42, NSM),
    (0x0A43, 0x0A46, L),
    (0x0A47, 0x0A48, NSM),
    (0x0A49, 0x0A4A, L),
    (0x0A4B, 0x0A4D, NSM),
    (0x0A4E, 0x0A50, L),
    (0x0A51, 0x0A51, NSM),
    (0x0A52, 0x0A6F, L),
    (0x0A70, 0x0A71, NSM),
    (0x0A72, 0x0A74, L),
    (0x0A75, 0x0A75, NSM),
    (0x0A76, 0x0A80, L),
    (0x0A81, 0x0A82, NSM),
    (0x0A83, 0x0ABB, L),
    (0x0ABC, 0x0ABC, NSM),
    (0x0ABD, 0x0AC0, L),
    (0x0AC1, 0x0AC5, NSM),
    (0x0AC6, 0x0AC6, L),
    (0x0AC7, 0x0AC8, NSM),
    (0x0AC9, 0x0ACC, L),
    (0x0ACD, 0x0ACD, NSM),
    (0x0ACE, 0x0AE1, L),
    (0x0AE2, 0x0AE3, NSM),
    (0x0AE4, 0x0AF0, L),
    (0x0AF1, 0x0AF1, ET),
    (0x0AF2, 0x0AF9, L),
    (0x0AFA, 0x0AFF, NSM),
    (0x0B00, 0x0B00, L),
    (0x0B01, 0x0B01, NSM),
    (0x0B02, 0x0B3B, L),
    (0x0B3C, 0x0B3C, NSM),
    (0x0B3D, 0x0B3E, L),
    (0x0B3F, 0x0B3F, NSM),
    (0x0B40, 0x0B40, L),
    (0x0B41, 0x0B44, NSM),
    (0x0B45, 0x0B4C, L),
    (0x0B4D, 0x0B4D, NSM),
    (0x0B4E, 0x0B54, L),
    (0x0B55, 0x0B56, NSM),
    (0x0B57, 0x0B61, L),
    (0x0B62, 0x0B63, NSM),
    (0x0B64, 0x0B81, L),
    (0x0B82, 0x0B82, NSM),
    (0x0B83, 0x0BBF, L),
    (0x0BC0, 0x0BC0, NSM),
    (0x0BC1, 0x0BCC, L),
    (0x0BCD, 0x0BCD, NSM),
    (0x0BCE, 0x0BF2, L),
    (0x0BF3, 0x0BF8, ON),
    (0x0BF9, 0x0BF9, ET),
    (0x0BFA, 0x0BFA, ON),
    (0x0BFB, 0x0BFF, L),
    (0x0C00, 0x0C00, NSM),
    (0x0C01, 0x0C03, L),
    (0x0C04, 0x0C04, NSM),
    (0x0C05, 0x0C3B, L),
    (0x0C3C, 0x0C3C, NSM),
    (0x0C3D, 0x0C3D, L),
    (0x0C3E, 0x0C40, NSM),
    (0x0C41, 0x0C45, L),
    (0x0C46, 0x0C48, NSM),
    (0x0C49, 0x0C49, L),
    (0x0C4A, 0x0C4D, NSM),
    (0x0C4E, 0x0C54, L),
    (0x0C55, 0x0C56, NSM),
    (0x0C57, 0x0C61, L),
    (0x0C62, 0x0C63, NSM),
    (0x0C64, 0x0C77, L),
    (0x0C78, 0x0C7E, ON),
    (0x0C7F, 0x0C80, L),
    (0x0C81, 0x0C81, NSM),
    (0x0C82, 0x0CBB, L),
    (0x0CBC, 0x0CBC, NSM),
    (0x0CBD, 0x0CCB, L),
    (0x0CCC, 0x0CCD, NSM),
    (0x0CCE, 0x0CE1, L),
    (0x0CE2, 0x0CE3, NSM),
    (0x0CE4, 0x0CFF, L),
    (0x0D00, 0x0D01, NSM),
    (0x0D02, 0x0D3A, L),
    (0x0D3B, 0x0D3C, NSM),
    (0x0D3D, 0x0D40, L),
    (0x0D41, 0x0D44, NSM),
    (0x0D45, 0x0D4C, L),
    (0x0D4D, 0x0D4D, NSM),
    (0x0D4E, 0x0D61, L),
    (0x0D62, 0x0D63, NSM),
    (0x0D64, 0x0D80, L),
    (0x0D81, 0x0D81, NSM),
    (0x0D82, 0x0DC9, L),
    (0x0DCA, 0x0DCA, NSM),
    (0x0DCB, 0x0DD1, L),
    (0x0DD2, 0x0DD4, NSM),
    (0x0DD5, 0x0DD5, L),
    (0x0DD6, 0x0DD6, NSM),
    (0x0DD7, 0x0E30, L),
    (0x0E31, 0x0E31, NSM),
    (0x0E32, 0x0E33, L),
    (0x0E34, 0x0E3A, NSM),
    (0x0E3B, 0x0E3E, L),
    (0x0E3F, 0x0E3F, ET),
    (0x0E40, 0x0E46, L),
    (0x0E47, 0x0E4E, NSM),
    (0x0E4F, 0x0EB0, L),
    (0x0EB1, 0x0EB1, NSM),
    (0x0EB2, 0x0EB3, L),
    (0x0EB4, 0x0EBC, NSM),
    (0x0EBD, 0x0EC7, L),
    (0x0EC8, 0x0ECD, NSM),
    (0x0ECE, 0x0F17, L),
    (0x0F18, 0x0F19, NSM),
    (0x0F1A, 0x0F34, L),
    (0x0F35, 0x0F35, NSM),
    (0x0F36, 0x0F36, L),
    (0x0F37, 0x0F37, NSM),
    (0x0F38, 0x0F38, L),
    (0x0F39, 0x0F39, NSM),
    (0x0F3A, 0x0F3D, ON),
    (0x0F3E, 0x0F70, L),
    (0x0F71, 0x0F7E, NSM),
    (0x0F7F, 0x0F7F, L),
    (0x0F80, 0x0F84, NSM),
    (0x0F85, 0x0F85, L),
    (0x0F86, 0x0F87, NSM),
    (0x0F88, 0x0F8C, L),
    (0x0F8D, 0x0F97, NSM),
    (0x0F98, 0x0F98, L),
    (0x0F99, 0x0FBC, NSM),
    (0x0FBD, 0x0FC5, L),
    (0x0FC6, 0x0FC6, NSM),
    (0x0FC7, 0x102C, L),
    (0x102D, 0x1030, NSM),
    (0x1031, 0x1031, L),
    (0x1032, 0x1037, NSM),
    (0x1038, 0x1038, L),
    (0x1039, 0x103A, NSM),
    (0x103B, 0x103C, L),
    (0x103D, 0x103E, NSM),
    (0x103F, 0x1057, L),
    (0x1058, 0x1059, NSM),
    (0x105A, 0x105D, L),
    (0x105E, 0x1060, NSM),
    (0x1061, 0x1070, L),
    (0x1071, 0x1074, NSM),
    (0x1075, 0x1081, L),
    (0x1082, 0x1082, NSM),
    (0x1083, 0x1084, L),
    (0x1085, 0x1086, NSM),
    (0x1087, 0x108C, L),
    (0x108D, 0x108D, NSM),
    (0x108E, 0x109C, L),
    (0x109D, 0x109D, NSM),
    (0x109E, 0x135C, L),
    (0x135D, 0x135F, NSM),
    (0x1360, 0x138F, L),
    (0x1390, 0x1399, ON),
    (0x139A, 0x13FF, L),
    (0x1400, 0x1400, ON),
    (0x1401, 0x167F, L),
    (0x1680, 0x1680, WS),
    (0x1681, 0x169A, L),
    (0x169B, 0x169C, ON),
    (0x169D, 0x1711, L),
    (0x1712, 0x1714, NSM),
    (0x1715, 0x1731, L),
    (0x1732, 0x1733, NSM),
    (0x1734, 0x1751, L),
    (0x1752, 0x1753, NSM),
    (0x1754, 0x1771, L),
    (0x1772, 0x1773, NSM),
    (0x1774, 0x17B3, L),
    (0x17B4, 0x17B5, NSM),
    (0x17B6, 0x17B6, L),
    (0x17B7, 0x17BD, NSM),
    (0x17BE, 0x17C5, L),
    (0x17C6, 0x17C6, NSM),
    (0x17C7, 0x17C8, L),
    (0x17C9, 0x17D3, NSM),
    (0x17D4, 0x17DA, L),
    (0x17DB, 0x17DB, ET),
    (0x17DC, 0x17DC, L),
    (0x17DD, 0x17DD, NSM),
    (0x17DE, 0x17EF, L),
    (0x17F0, 0x17F9, ON),
    (0x17FA, 0x17FF, L),
    (0x1800, 0x180A, ON),
    (0x180B, 0x180D, NSM),
    (0x180E, 0x180E, BN),
    (0x180F, 0x180F, NSM),
    (0x1810, 0x1884, L),
    (0x1885, 0x1886, NSM),
    (0x1887, 0x18A8, L),
    (0x18A9, 0x18A9, NSM),
    (0x18AA, 0x191F, L),
    (0x1920, 0x1922, NSM),
    (0x1923, 0x1926, L),
    (0x1927, 0x1928, NSM),
    (0x1929, 0x1931, L),
    (0x1932, 0x1932, NSM),
    (0x1933, 0x1938, L),
    (0x1939, 0x193B, NSM),
    (0x193C, 0x193F, L),
    (0x1940, 0x1940, ON),
    (0x1941, 0x1943, L),
    (0x1944, 0x1945, ON),
    (0x1946, 0x19DD, L),
    (0x19DE, 0x19FF, ON),
    (0x1A00, 0x1A16, L),
    (0x1A17, 0x1A18, NSM),
    (0x1A19, 0x1A1A, L),
    (0x1A1B, 0x1A1B, NSM),
    (0x1A1C, 0x1A55, L),
    (0x1A56, 0x1A56, NSM),
    (0x1A57, 0x1A57, L),
    (0x1A58, 0x1A5E, NSM),
    (0x1A5F, 0x1A5F, L),
    (0x1A60, 0x1A60, NSM),
    (0x1A61, 0x1A61, L),
    (0x1A62, 0x1A62, NSM),
    (0x1A63, 0x1A64, L),
    (0x1A65, 0x1A6C, NSM),
    (0x1A6D, 0x1A72, L),
    (0x1A73, 0x1A7C, NSM),
    (0x1A7D, 0x1A7E, L),
    (0x1A7F, 0x1A7F, NSM),
    (0x1A80, 0x1AAF, L),
    (0x1AB0, 0x1ACE, NSM),
    (0x1ACF, 0x1AFF, L),
    (0x1B00, 0x1B03, NSM),
    (0x1B04, 0x1B33, L),
    (0x1B34, 0x1B34, NSM),
    (0x1B35, 0x1B35, L),
    (0x1B36, 0x1B3A, NSM),
    (0x1B3B, 0x1B3B, L),
    (0x1B3C, 0x1B3C, NSM),
    (0x1B3D, 0x1B41, L),
    (0x1B42, 0x1B42, NSM),
    (0x1B43, 0x1B6A, L),
    (0x1B6B, 0x1B73, NSM),
    (0x1B74, 0x1B7F, L),
    (0x1B80, 0x1B81, NSM),
    (0x1B82, 0x1BA1, L),
    (0x1BA2, 0x1BA5, NSM),
    (0x1BA6, 0x1BA7, L),
    (0x1BA8, 0x1BA9, NSM),
    (0x1BAA, 0x1BAA, L),
    (0x1BAB, 0x1BAD, NSM),
    (0x1BAE, 0x1BE5, L),
    (0x1BE6, 0x1BE6, NSM),
    (0x1BE7, 0x1BE7, L),
    (0x1BE8, 0x1BE9, NSM),
    (0x1BEA, 0x1BEC, L),
    (0x1BED, 0x1BED, NSM),
    (0x1BEE, 0x1BEE, L),
    (0x1BEF, 0x1BF1, NSM),
    (0x1BF2, 0x1C2B, L),
    (0x1C2C, 0x1C33, NSM),
    (0x1C34, 0x1C35, L),
    (0x1C36, 0x1C37, NSM),
    (0x1C38, 0x1CCF, L),
    (0x1CD0, 0x1CD2, NSM),
    (0x1CD3, 0x1CD3, L),
    (0x1CD4, 0x1CE0, NSM),
    (0x1CE1, 0x1CE1, L),
    (0x1CE2, 0x1CE8, NSM),
    (0x1CE9, 0x1CEC, L),
    (0x1CED, 0x1CED, NSM),
    (0x1CEE, 0x1CF3, L),
    (0x1CF4, 0x1CF4, NSM),
    (0x1CF5, 0x1CF7, L),
    (0x1CF8, 0x1CF9, NSM),
    (0x1CFA, 0x1DBF, L),
    (0x1DC0, 0x1DFF, NSM),
    (0x1E00, 0x1FBC, L),
    (0x1FBD, 0x1FBD, ON),
    (0x1FBE, 0x1FBE, L),
    (0x1FBF, 0x1FC1, ON),
    (0x1FC2, 0x1FCC, L),
    (0x1FCD, 0x1FCF, ON),
    (0x1FD0, 0x1FDC, L),
    (0x1FDD, 0x1FDF, ON),
    (0x1FE0, 0x1FEC, L),
    (0x1FED, 0x1FEF, ON),
    (0x1FF0, 0x1FFC, L),
    (0x1FFD, 0x1FFE, ON),
    (0x1FFF, 0x1FFF, L),
    (0x2000, 0x200A, WS),
    (0x200B, 0x200D, BN),
    (0x200E, 0x200E, L),
    (0x200F, 0x200F, R),
    (0x2010, 0x2027, ON),
    (0x2028, 0x2028, WS),
    (0x2029, 0x2029, B),
    (0x202A, 0x202A, LRE),
    (0x202B, 0x202B, RLE),
    (0x202C, 0x202C, PDF),
    (0x202D, 0x202D, LRO),
    (0x202E, 0x202E, RLO),
    (0x202F, 0x202F, CS),
    (0x2030, 0x2034, ET),
    (0x2035, 0x2043, ON),
    (0x2044, 0x2044, CS),
    (0x2045, 0x205E, ON),
    (0x205F, 0x205F, WS),
    (0x2060, 0x2065, BN),
    (0x2066, 0x2066, LRI),
    (0x2067, 0x2067, RLI),
    (0x2068, 0x2068, FSI),
    (0x2069, 0x2069, PDI),
    (0x206A, 0x206F, BN),
    (0x2070, 0x2070, EN),
    (0x2071, 0x2073, L),
    (0x2074, 0x2079, EN),
    (0x207A, 0x207B, ES),
    (0x207C, 0x207E, ON),
    (0x207F, 0x207F, L),
    (0x2080, 0x2089, EN),
    (0x208A, 0x208B, ES),
    (0x208C, 0x208E, ON),
    (0x208F, 0x209F, L),
    (0x20A0, 0x20CF, ET),
    (0x20D0, 0x20F0, NSM),
    (0x20F1, 0x20FF, L),
    (0x2100, 0x2101, ON),
    (0x2102, 0x2102, L),
    (0x2103, 0x2106, ON),
    (0x2107, 0x2107, L),
    (0x2108, 0x2109, ON),
    (0x210A, 0x2113, L),
    (0x2114, 0x2114, ON),
    (0x2115, 0x2115, L),
    (0x2116, 0x2118, ON),
    (0x2119, 0x211D, L),
    (0x211E, 0x2123, ON),
    (0x2124, 0x2124, L),
    (0x2125, 0x2125, ON),
    (0x2126, 0x2126, L),
    (0x2127, 0x2127, ON),
    (0x2128, 0x2128, L),
    (0x2129, 0x2129, ON),
    (0x212A, 0x212D, L),
    (0x212E, 0x212E, ET),
    (0x212F, 0x2139, L),
    (0x213A, 0x213B, ON),
    (0x213C, 0x213F, L),
    (0x2140, 0x2144, ON),
    (0x2145, 0x2149, L),
    (0x214A, 0x214D, ON),
    (0x214E, 0x214F, L),
    (0x2150, 0x215F, ON),
    (0x2160, 0x2188, L),
    (0x2189, 0x218B, ON),
    (0x218C, 0x218F, L),
    (0x2190, 0x2211, ON),
    (0x2212, 0x2212, ES),
    (0x2213, 0x2213, ET),
    (0x2214, 0x2335, ON),
    (0x2336, 0x237A, L),
    (0x237B, 0x2394, ON),
    (0x2395, 0x2395, L),
    (0x2396, 0x2426, ON),
    (0x2427, 0x243F, L),
    (0x2440, 0x244A, ON),
    (0x244B, 0x245F, L),
    (0x2460, 0x2487, ON),
    (0x2488, 0x249B, EN),
    (0x249C, 0x24E9, L),
    (0x24EA, 0x26AB, ON),
    (0x26AC, 0x26AC, L),
    (0x26AD, 0x27FF, ON),
    (0x2800, 0x28FF, L),
    (0x2900, 0x2B73, ON),
    (0x2B74, 0x2B75, L),
    (0x2B76, 0x2B95, ON),
    (0x2B96, 0x2B96, L),
    (0x2B97, 0x2BFF, ON),
    (0x2C00, 0x2CE4, L),
    (0x2CE5, 0x2CEA, ON),
    (0x2CEB, 0x2CEE, L),
    (0x2CEF, 0x2CF1, NSM),
    (0x2CF2, 0x2CF8, L),
    (0x2CF9, 0x2CFF, ON),
    (0x2D00, 0x2D7E, L),
    (0x2D7F, 0x2D7F, NSM),
    (0x2D80, 0x2DDF, L),
    (0x2DE0, 0x2DFF, NSM),
    (0x2E00, 0x2E5D, ON),
    (0x2E5E, 0x2E7F, L),
    (0x2E80, 0x2E99, ON),
    (0x2E9A, 0x2E9A, L),
    (0x2E9B, 0x2EF3, ON),
    (0x2EF4, 0x2EFF, L),
    (0x2F00, 0x2FD5, ON),
    (0x2FD6, 0x2FEF, L),
    (0x2FF0, 0x2FFB, ON),
    (0x2FFC, 0x2FFF, L),
    (0x3000, 0x3000, WS),
    (0x3001, 0x3004, ON),
    (0x3005, 0x3007, L),
    (0x3008, 0x3020, ON),
    (0x3021, 0x3029, L),
    (0x302A, 0x302D, NSM),
    (0x302E, 0x302F, L),
    (0x3030, 0x3030, ON),
    (0x3031, 0x3035, L),
    (0x3036, 0x3037, ON),
    (0x3038, 0x303C, L),
    (0x303D, 0x303F, ON),
    (0x3040, 0x3098, L),
    (0x3099, 0x309A, NSM),
    (0x309B, 0x309C, ON),
    (0x309D, 0x309F, L),
    (0x30A0, 0x30A0, ON),
    (0x30A1, 0x30FA, L),
    (0x30FB, 0x30FB, ON),
    (0x30FC, 0x31BF, L),
    (0x31C0, 0x31E3, ON),
    (0x31E4, 0x321C, L),
    (0x321D, 0x321E, ON),
    (0x321F, 0x324F, L),
    (0x3250, 0x325F, ON),
    (0x3260, 0x327B, L),
    (0x327C, 0x327E, ON),
    (0x327F, 0x32B0, L),
    (0x32B1, 0x32BF, ON),
    (0x32C0, 0x32CB, L),
    (0x32CC, 0x32CF, ON),
    (0x32D0, 0x3376, L),
    (0x3377, 0x337A, ON),
    (0x337B, 0x33DD, L),
    (0x33DE, 0x33DF, ON),
    (0x33E0, 0x33FE, L),
    (0x33FF, 0x33FF, ON),
    (0x3400, 0x4DBF, L),
    (0x4DC0, 0x4DFF, ON),
    (0x4E00, 0xA48F, L),
    (0xA490, 0xA4C6, ON),
    (0xA4C7, 0xA60C, L),
    (0xA60D, 0xA60F, ON),
    (0xA610, 0xA66E, L),
    (0xA66F, 0xA672, NSM),
    (0xA673, 0xA673, ON),
    (0xA674, 0xA67D, NSM),
    (0xA67E, 0xA67F, ON),
    (0xA680, 0xA69D, L),
    (0xA69E, 0xA69F, NSM),
    (0xA6A0, 0xA6EF, L),
    (0xA6F0, 0xA6F1, NSM),
    (0xA6F2, 0xA6FF, L),
    (0xA700, 0xA721, ON),
    (0xA722, 0xA787, L),
    (0xA788, 0xA788, ON),
    (0xA789, 0xA801, L),
    (0xA802, 0xA802, NSM),
    (0xA803, 0xA805, L),
    (0xA806, 0xA806, NSM),
    (0xA807, 0xA80A, L),
    (0xA80B, 0xA80B, NSM),
    (0xA80C, 0xA824, L),
    (0xA825, 0xA826, NSM),
    (0xA827, 0xA827, L),
    (0xA828, 0xA82B, ON),
    (0xA82C, 0xA82C, NSM),
    (0xA82D, 0xA837, L),
    (0xA838, 0xA839, ET),
    (0xA83A, 0xA873, L),
    (0xA874, 0xA877, ON),
    (0xA878, 0xA8C3, L),
    (0xA8C4, 0xA8C5, NSM),
    (0xA8C6, 0xA8DF, L),
    (0xA8E0, 0xA8F1, NSM),
    (0xA8F2, 0xA8FE, L),
    (0xA8FF, 0xA8FF, NSM),
    (0xA900, 0xA925, L),
    (0xA926, 0xA92D, NSM),
    (0xA92E, 0xA946, L),
    (0xA947, 0xA951, NSM),
    (0xA952, 0xA97F, L),
    (0xA980, 0xA982, NSM),
    (0xA983, 0xA9B2, L),
    (0xA9B3, 0xA9B3, NSM),
    (0xA9B4, 0xA9B5, L),
    (0xA9B6, 0xA9B9, NSM),
    (0xA9BA, 0xA9BB, L),
    (0xA9BC, 0xA9BD, NSM),
    (0xA9BE, 0xA9E4, L),
    (0xA9E5, 0xA9E5, NSM),
    (0xA9E6, 0xAA28, L),
    (0xAA29, 0xAA2E, NSM),
    (0xAA2F, 0xAA30, L),
    (0xAA31, 0xAA32, NSM),
    (0xAA33, 0xAA34, L),
    (0xAA35, 0xAA36, NSM),
    (0xAA37, 0xAA42, L),
    (0xAA43, 0xAA43, NSM),
    (0xAA44, 0xAA4B, L),
    (0xAA4C, 0xAA4C, NSM),
    (0xAA4D, 0xAA7B, L),
    (0xAA7C, 0xAA7C, NSM),
    (0xAA7D, 0xAAAF, L),
    (0xAAB0, 0xAAB0, NSM),
    (0xAAB1, 0xAAB1, L),
    (0xAAB2, 0xAAB4, NSM),
    (0xAAB5, 0xAAB6, L),
    (0xAAB7, 0xAAB8, NSM),
    (0xAAB9, 0xAABD, L),
    (0xAABE, 0xAABF, NSM),
    (0xAAC0, 0xAAC0, L),
    (0xAAC1, 0xAAC1, NSM),
    (0xAAC2, 0xAAEB, L),
    (0xAAEC, 0xAAED, NSM),
    (0xAAEE, 0xAAF5, L),
    (0xAAF6, 0xAAF6, NSM),
    (0xAAF7, 0xAB69, L),
    (0xAB6A, 0xAB6B, ON),
    (0xAB6C, 0xABE4, L),
    (0xABE5, 0xABE5, NSM),
    (0xABE6, 0xABE7, L),
    (0xABE8, 0xABE8, NSM),
    (0xABE9, 0xABEC, L),
    (0xABED, 0xABED, NSM),
    (0xABEE, 0xFB1C, L),
    (0xFB1D, 0xFB1D, R),
    (0xFB1E, 0xFB1E, NSM),
    (0xFB1F, 0xFB28, R),
    (0xFB29, 0xFB29, ES),
    (0xFB2A, 0xFB4F, R),
    (0xFB50, 0xFD3D, AL),
    (0xFD3E, 0xFD4F, ON),
    (0xFD50, 0xFDCE, AL),
    (0xFDCF, 0xFDCF, ON),
    (0xFDD0, 0xFDEF, BN),
    (0xFDF0, 0xFDFC, AL),
    (0xFDFD, 0xFDFF, ON),
    (0xFE00, 0xFE0F, NSM),
    (0xFE10, 0xFE19, ON),
    (0xFE1A, 0xFE1F, L),
    (0xFE20, 0xFE2F, NSM),
    (0xFE30, 0xFE4F, ON),
    (0xFE50, 0xFE50, CS),
    (0xFE51, 0xFE51, ON),
    (0xFE52, 0xFE52, CS),
    (0xFE53, 0xFE53, L),
    (0xFE54, 0xFE54, ON),
    (0xFE55, 0xFE55, CS),
    (0xFE56, 0xFE5E, ON),
    (0xFE5F, 0xFE5F, ET),
    (0xFE60, 0xFE61, ON),
    (0xFE62, 0xFE63, ES),
    (0xFE64, 0xFE66, ON),
    (0xFE67, 0xFE67, L),
    (0xFE68, 0xFE68, ON),
    (0xFE69, 0xFE6A, ET),
    (0xFE6B, 0xFE6B, ON),
    (0xFE6C, 0xFE6F, L),
    (0xFE70, 0xFEFE, AL),
    (0xFEFF, 0xFEFF, BN),
    (0xFF00, 0xFF00, L),
    (0xFF01, 0xFF02, ON),
    (0xFF03, 0xFF05, ET),
    (0xFF06, 0xFF0A, ON),
    (0xFF0B, 0xFF0B, ES),
    (0xFF0C, 0xFF0C, CS),
    (0xFF0D, 0xFF0D, ES),
    (0xFF0E, 0xFF0F, CS),
    (0xFF10, 0xFF19, EN),
    (0xFF1A, 0xFF1A, CS),
    (0xFF1B, 0xFF20, ON),
    (0xFF21, 0xFF3A, L),
    (0xFF3B, 0xFF40, ON),
    (0xFF41, 0xFF5A, L),
    (0xFF5B, 0xFF65, ON),
    (0xFF66, 0xFFDF, L),
    (0xFFE0, 0xFFE1, ET),
    (0xFFE2, 0xFFE4, ON),
    (0xFFE5, 0xFFE6, ET),
    (0xFFE7, 0xFFE7, L),
    (0xFFE8, 0xFFEE, ON),
    (0xFFEF, 0xFFEF, L),
    (0xFFF0, 0xFFF8, BN),
    (0xFFF9, 0xFFFD, ON),
    (0xFFFE, 0xFFFF, BN),
    (0x10000, 0x10100, L),
    (0x10101, 0x10101, ON),
    (0x10102, 0x1013F, L),
    (0x10140, 0x1018C, ON),
    (0x1018D, 0x1018F, L),
    (0x10190, 0x1019C, ON),
    (0x1019D, 0x1019F, L),
    (0x101A0, 0x101A0, ON),
    (0x101A1, 0x101FC, L),
    (0x101FD, 0x101FD, NSM),
    (0x101FE, 0x102DF, L),
    (0x102E0, 0x102E0, NSM),
    (0x102E1, 0x102FB, EN),
    (0x102FC, 0x10375, L),
    (0x10376, 0x1037A, NSM),
    (0x1037B, 0x107FF, L),
    (0x10800, 0x1091E, R),
    (0x1091F, 0x1091F, ON),
    (0x10920, 0x10A00, R),
    (0x10A01, 0x10A03, NSM),
    (0x10A04, 0x10A04, R),
    (0x10A05, 0x10A06, NSM),
    (0x10A07, 0x10A0B, R),
    (0x10A0C, 0x10A0F, NSM),
    (0x10A10, 0x10A37, R),
    (0x10A38, 0x10A3A, NSM),
    (0x10A3B, 0x10A3E, R),
    (0x10A3F, 0x10A3F, NSM),
    (0x10A40, 0x10AE4, R),
    (0x10AE5, 0x10AE6, NSM),
    (0x10AE7, 0x10B38, R),
    (0x10B39, 0x10B3F, ON),
    (0x10B40, 0x10CFF, R),
    (0x10D00, 0x10D23, AL),
    (0x10D24, 0x10D27, NSM),
    (0x10D28, 0x10D2F, AL),
    (0x10D30, 0x10D39, AN),
    (0x10D3A, 0x10D3F, AL),
    (0x10D40, 0x10E5F, R),
    (0x10E60, 0x10E7E, AN),
    (0x10E7F, 0x10EAA, R),
    (0x10EAB, 0x10EAC, NSM),
    (0x10EAD, 0x10F2F, R),
    (0x10F30, 0x10F45, AL),
    (0x10F46, 0x10F50, NSM),
    (0x10F51, 0x10F6F, AL),
    (0x10F70, 0x10F81, R),
    (0x10F82, 0x10F85, NSM),
    (0x10F86, 0x10FFF, R),
    (0x11000, 0x11000, L),
    (0x11001, 0x11001, NSM),
    (0x11002, 0x11037, L),
    (0x11038, 0x11046, NSM),
    (0x11047, 0x11051, L),
    (0x11052, 0x11065, ON),
    (0x11066, 0x1106F, L),
    (0x11070, 0x11070, NSM),
    (0x11071, 0x11072, L),
    (0x11073, 0x11074, NSM),
    (0x11075, 0x1107E, L),
    (0x1107F, 0x11081, NSM),
    (0x11082, 0x110B2, L),
    (0x110B3, 0x110B6, NSM),
    (0x110B7, 0x110B8, L),
    (0x110B9, 0x110BA, NSM),
    (0x110BB, 0x110C1, L),
    (0x110C2, 0x110C2, NSM),
    (0x110C3, 0x110FF, L),
    (0x11100, 0x11102, NSM),
    (0x11103, 0x11126, L),
    (0x11127, 0x1112B, NSM),
    (0x1112C, 0x1112C, L),
    (0x1112D, 0x11134, NSM),
    (0x11135, 0x11172, L),
    (0x11173, 0x11173, NSM),
    (0x11174, 0x1117F, L),
    (0x11180, 0x11181, NSM),
    (0x11182, 0x111B5, L),
    (0x111B6, 0x111BE, NSM),
    (0x111BF, 0x111C8, L),
    (0x111C9, 0x111CC, NSM),
    (0x111CD, 0x111CE, L),
    (0x111CF, 0x111CF, NSM),
    (0x111D0, 0x1122E, L),
    (0x1122F, 0x11231, NSM),
    (0x11232, 0x11233, L),
    (0x11234, 0x11234, NSM),
    (0x11235, 0x11235, L),
    (0x11236, 0x11237, NSM),
    (0x11238, 0x1123D, L),
    (0x1123E, 0x1123E, NSM),
    (0x1123F, 0x112DE, L),
    (0x112DF, 0x112DF, NSM),
    (0x112E0, 0x112E2, L),
    (0x112E3, 0x112EA, NSM),
    (0x112EB, 0x112FF, L),
    (0x11300, 0x11301, NSM),
    (0x11302, 0x1133A, L),
    (0x1133B, 0x1133C, NSM),
    (0x1133D, 0x1133F, L),
    (0x11340, 0x11340, NSM),
    (0x11341, 0x11365, L),
    (0x11366, 0x1136C, NSM),
    (0x1136D, 0x1136F, L),
    (0x11370, 0x11374, NSM),
    (0x11375, 0x11437, L),
    (0x11438, 0x1143F, NSM),
    (0x11440, 0x11441, L),
    (0x11442, 0x11444, NSM),
    (0x11445, 0x11445, L),
    (0x11446, 0x11446, NSM),
    (0x11447, 0x1145D, L),
    (0x1145E, 0x1145E, NSM),
    (0x1145F, 0x114B2, L),
    (0x114B3, 0x114B8, NSM),
    (0x114B9, 0x114B9, L),
    (0x114BA, 0x114BA, NSM),
    (0x114BB, 0x114BE, L),
    (0x114BF, 0x114C0, NSM),
    (0x114C1, 0x114C1, L),
    (0x114C2, 0x114C3, NSM),
    (0x114C4, 0x115B1, L),
    (0x115B2, 0x115B5, NSM),
    (0x115B6, 0x115BB, L),
    (0x115BC, 0x115BD, NSM),
    (0x115BE, 0x115BE, L),
    (0x115BF, 0x115C0, NSM),
    (0x115C1, 0x115DB, L),
    (0x115DC, 0x115DD, NSM),
    (0x115DE, 0x11632, L),
    (0x11633, 0x1163A, NSM),
    (0x1163B, 0x1163C, L),
    (0x1163D, 0x1163D, NSM),
    (0x1163E, 0x1163E, L),
    (0x1163F, 0x11640, NSM),
    (0x11641, 0x1165F, L),
    (0x11660, 0x1166C, ON),
    (0x1166D, 0x116AA, L),
    (0x116AB, 0x116AB, NSM),
    (0x116AC, 0x116AC, L),
    (0x116AD, 0x116AD, NSM),
    (0x116AE, 0x116AF, L),
    (0x116B0, 0x116B5, NSM),
    (0x116B6, 0x116B6, L),
    (0x116B7, 0x116B7, NSM),
    (0x116B8, 0x1171C, L),
    (0x1171D, 0x1171F, NSM),
    (0x11720, 0x11721, L),
    (0x11722, 0x11725, NSM),
    (0x11726, 0x11726, L),
    (0x11727, 0x1172B, NSM),
    (0x1172C, 0x1182E, L),
    (0x1182F, 0x11837, NSM),
    (0x11838, 0x11838, L),
    (0x11839, 0x1183A, NSM),
    (0x1183B, 0x1193A, L),
    (0x1193B, 0x1193C, NSM),
    (0x1193D, 0x1193D, L),
    (0x1193E, 0x1193E, NSM),
    (0x1193F, 0x11942, L),
    (0x11943, 0x11943, NSM),
    (0x11944, 0x119D3, L),
    (0x119D4, 0x119D7, NSM),
    (0x119D8, 0x119D9, L),
    (0x119DA, 0x119DB, NSM),
    (0x119DC, 0x119DF, L),
    (0x119E0, 0x119E0, NSM),
    (0x119E1, 0x11A00, L),
    (0x11A01, 0x11A06, NSM),
    (0x11A07, 0x11A08, L),
    (0x11A09, 0x11A0A, NSM),
    (0x11A0B, 0x11A32, L),
    (0x11A33, 0x11A38, NSM),
    (0x11A39, 0x11A3A, L),
    (0x11A3B, 0x11A3E, NSM),
    (0x11A3F, 0x11A46, L),
    (0x11A47, 0x11A47, NSM),
    (0x11A48, 0x11A50, L),
    (0x11A51, 0x11A56, NSM),
    (0x11A57, 0x11A58, L),
    (0x11A59, 0x11A5B, NSM),
    (0x11A5C, 0x11A89, L),
    (0x11A8A, 0x11A96, NSM),
    (0x11A97, 0x11A97, L),
    (0x11A98, 0x11A99, NSM),
    (0x11A9A, 0x11C2F, L),
    (0x11C30, 0x11C36, NSM),
    (0x11C37, 0x11C37, L),
    (0x11C38, 0x11C3D, NSM),
    (0x11C3E, 0x11C91, L),
    (0x11C92, 0x11CA7, NSM),
    (0x11CA8, 0x11CA9, L),
    (0x11CAA, 0x11CB0, NSM),
    (0x11CB1, 0x11CB1, L),
    (0x11CB2, 0x11CB3, NSM),
    (0x11CB4, 0x11CB4, L),
    (0x11CB5, 0x11CB6, NSM),
    (0x11CB7, 0x11D30, L),
    (0x11D31, 0x11D36, NSM),
    (0x11D37, 0x11D39, L),
    (0x11D3A, 0x11D3A, NSM),
    (0x11D3B, 0x11D3B, L),
    (0x11D3C, 0x11D3D, NSM),
    (0x11D3E, 0x11D3E, L),
    (0x11D3F, 0x11D45, NSM),
    (0x11D46, 0x11D46, L),
    (0x11D47, 0x11D47, NSM),
    (0x11D48, 0x11D8F, L),
    (0x11D90, 0x11D91, NSM),
    (0x11D92, 0x11D94, L),
    (0x11D95, 0x11D95, NSM),
    (0x11D96, 0x11D96, L),
    (0x11D97, 0x11D97, NSM),
    (0x11D98, 0x11EF2, L),
    (0x11EF3, 0x11EF4, NSM),
    (0x11EF5, 0x11FD4, L),
    (0x11FD5, 0x11FDC, ON),
    (0x11FDD, 0x11FE0, ET),
    (0x11FE1, 0x11FF1, ON),
    (0x11FF2, 0x16AEF, L),
    (0x16AF0, 0x16AF4, NSM),
    (0x16AF5, 0x16B2F, L),
    (0x16B30, 0x16B36, NSM),
    (0x16B37, 0x16F4E, L),
    (0x16F4F, 0x16F4F, NSM),
    (0x16F50, 0x16F8E, L),
    (0x16F8F, 0x16F92, NSM),
    (0x16F93, 0x16FE1, L),
    (0x16FE2, 0x16FE2, ON),
    (0x16FE3, 0x16FE3, L),
    (0x16FE4, 0x16FE4, NSM),
    (0x16FE5, 0x1BC9C, L),
    (0x1BC9D, 0x1BC9E, NSM),
    (0x1BC9F, 0x1BC9F, L),
    (0x1BCA0, 0x1BCA3, BN),
    (0x1BCA4, 0x1CEFF, L),
    (0x1CF00, 0x1CF2D, NSM),
    (0x1CF2E, 0x1CF2F, L),
    (0x1CF30, 0x1CF46, NSM),
    (0x1CF47, 0x1D166, L),
    (0x1D167, 0x1D169, NSM),
    (0x1D16A, 0x1D172, L),
    (0x1D173, 0x1D17A, BN),
    (0x1D17B, 0x1D182, NSM),
    (0x1D183, 0x1D184, L),
    (0x1D185, 0x1D18B, NSM),
    (0x1D18C, 0x1D1A9, L),
    (0x1D1AA, 0x1D1AD, NSM),
    (0x1D1AE, 0x1D1E8, L),
    (0x1D1E9, 0x1D1EA, ON),
    (0x1D1EB, 0x1D1FF, L),
    (0x1D200, 0x1D241, ON),
    (0x1D242, 0x1D244, NSM),
    (0x1D245, 0x1D245, ON),
    (0x1D246, 0x1D2FF, L),
    (0x1D300, 0x1D356, ON),
    (0x1D357, 0x1D6DA, L),
    (0x1D6DB, 0x1D6DB, ON),
    (0x1D6DC, 0x1D714, L),
    (0x1D715, 0x1D715, ON),
    (0x1D716, 0x1D74E, L),
    (0x1D74F, 0x1D74F, ON),
    (0x1D750, 0x1D788, L),
    (0x1D789, 0x1D789, ON),
    (0x1D78A, 0x1D7C2, L),
    (0x1D7C3, 0x1D7C3, ON),
    (0x1D7C4, 0x1D7CD, L),
    (0x1D7CE, 0x1D7FF, EN),
    (0x1D800, 0x1D9FF, L),
    (0x1DA00, 0x1DA36, NSM),
    (0x1DA37, 0x1DA3A, L),
    (0x1DA3B, 0x1DA6C, NSM),
    (0x1DA6D, 0x1DA74, L),
    (0x1DA75, 0x1DA75, NSM),
    (0x1DA76, 0x1DA83, L),
    (0x1DA84, 0x1DA84, NSM),
    (0x1DA85, 0x1DA9A, L),
    (0x1DA9B, 0x1DA9F, NSM),
    (0x1DAA0, 0x1DAA0, L),
    (0x1DAA1, 0x1DAAF, NSM),
    (0x1DAB0, 0x1DFFF, L),
    (0x1E000, 0x1E006, NSM),
    (0x1E007, 0x1E007, L),
    (0x1E008, 0x1E018, NSM),
    (0x1E019, 0x1E01A, L),
    (0x1E01B, 0x1E021, NSM),
    (0x1E022, 0x1E022, L),
    (0x1E023, 0x1E024, NSM),
    (0x1E025, 0x1E025, L),
    (0x1E026, 0x1E02A, NSM),
    (0x1E02B, 0x1E12F, L),
    (0x1E130, 0x1E136, NSM),
    (0x1E137, 0x1E2AD, L),
    (0x1E2AE, 0x1E2AE, NSM),
    (0x1E2AF, 0x1E2EB, L),
    (0x1E2EC, 0x1E2EF, NSM),
    (0x1E2F0, 0x1E2FE, L),
    (0x1E2FF, 0x1E2FF, ET),
    (0x1E300, 0x1E7FF, L),
    (0x1E800, 0x1E8CF, R),
    (0x1E8D0, 0x1E8D6, NSM),
    (0x1E8D7, 0x1E943, R),
    (0x1E944, 0x1E94A, NSM),
    (0x1E94B, 0x1EC6F, R),
    (0x1EC70, 0x1ECBF, AL),
    (0x1ECC0, 0x1ECFF, R),
    (0x1ED00, 0x1ED4F, AL),
    (0x1ED50, 0x1EDFF, R),
    (0x1EE00, 0x1EEEF, AL),
    (0x1EEF0, 0x1EEF1, ON),
    (0x1EEF2, 0x1EEFF, AL),
    (0x1EF00, 0x1EFFF, R),
    (0x1F000, 0x1F02B, ON),
    (0x1F02C, 0x1F02F, L),
    (0x1F030, 0x1F093, ON),
    (0x1F094, 0x1F09F, L),
    (0x1F0A0, 0x1F0AE, ON),
    (0x1F0AF, 0x1F0B0, L),
    (0x1F0B1, 0x1F0BF, ON),
    (0x1F0C0, 0x1F0C0, L),
    (0x1F0C1, 0x1F0CF, ON),
    (0x1F0D0, 0x1F0D0, L),
    (0x1F0D1, 0x1F0F5, ON),
    (0x1F0F6, 0x1F0FF, L),
    (0x1F100, 0x1F10A, EN),
    (0x1F10B, 0x1F10F, ON),
    (0x1F110, 0x1F12E, L),
    (0x1F12F, 0x1F12F, ON),
    (0x1F130, 0x1F169, L),
    (0x1F16A, 0x1F16F, ON),
    (0x1F170, 0x1F1AC, L),
    (0x1F1AD, 0x1F1AD, ON),
    (0x1F1AE, 0x1F25F, L),
    (0x1F260, 0x1F265, ON),
    (0x1F266, 0x1F2FF, L),
    (0x1F300, 0x1F6D7, ON),
    (0x1F6D8, 0x1F6DC, L),
    (0x1F6DD, 0x1F6EC, ON),
    (0x1F6ED, 0x1F6EF, L),
    (0x1F6F0, 0x1F6FC, ON),
    (0x1F6FD, 0x1F6FF, L),
    (0x1F700, 0x1F773, ON),
    (0x1F774, 0x1F77F, L),
    (0x1F780, 0x1F7D8, ON),
    (0x1F7D9, 0x1F7DF, L),
    (0x1F7E0, 0x1F7EB, ON),
    (0x1F7EC, 0x1F7EF, L),
    (0x1F7F0, 0x1F7F0, ON),
    (0x1F7F1, 0x1F7FF, L),
    (0x1F800, 0x1F80B, ON),
    (0x1F80C, 0x1F80F, L),
    (0x1F810, 0x1F847, ON),
    (0x1F848, 0x1F84F, L),
    (0x1F850, 0x1F859, ON),
    (0x1F85A, 0x1F85F, L),
    (0x1F860, 0x1F887, ON),
    (0x1F888, 0x1F88F, L),
    (0x1F890, 0x1F8AD, ON),
    (0x1F8AE, 0x1F8AF, L),
    (0x1F8B0, 0x1F8B1, ON),
    (0x1F8B2, 0x1F8FF, L),
    (0x1F900, 0x1FA53, ON),
    (0x1FA54, 0x1FA5F, L),
    (0x1FA60, 0x1FA6D, ON),
    (0x1FA6E, 0x1FA6F, L),
    (0x1FA70, 0x1FA74, ON),
    (0x1FA75, 0x1FA77, L),
    (0x1FA78, 0x1FA7C, ON),
    (0x1FA7D, 0x1FA7F, L),
    (0x1FA80, 0x1FA86, ON),
    (0x1FA87, 0x1FA8F, L),
    (0x1FA90, 0x1FAAC, ON),
    (0x1FAAD, 0x1FAAF, L),
    (0x1FAB0, 0x1FABA, ON),
    (0x1FABB, 0x1FABF, L),
    (0x1FAC0, 0x1FAC5, ON),
    (0x1FAC6, 0x1FACF, L),
    (0x1FAD0, 0x1FAD9, ON),
    (0x1FADA, 0x1FADF, L),
    (0x1FAE0, 0x1FAE7, ON),
    (0x1FAE8, 0x1FAEF, L),
    (0x1FAF0, 0x1FAF6, ON),
    (0x1FAF7, 0x1FAFF, L),
    (0x1FB00, 0x1FB92, ON),
    (0x1FB93, 0x1FB93, L),
    (0x1FB94, 0x1FBCA, ON),
    (0x1FBCB, 0x1FBEF, L),
    (0x1FBF0, 0x1FBF9, EN),
    (0x1FBFA, 0x1FFFD, L),
    (0x1FFFE, 0x1FFFF, BN),
    (0x20000, 0x2FFFD, L),
    (0x2FFFE, 0x2FFFF, BN),
    (0x30000, 0x3FFFD, L),
    (0x3FFFE, 0x3FFFF, BN),
    (0x40000, 0x4FFFD, L),
    (0x4FFFE, 0x4FFFF, BN),
    (0x50000, 0x5FFFD, L),
    (0x5FFFE, 0x5FFFF, BN),
    (0x60000, 0x6FFFD, L),
    (0x6FFFE, 0x6FFFF, BN),
    (0x70000, 0x7FFFD, L),
    (0x7FFFE, 0x7FFFF, BN),
    (0x80000, 0x8FFFD, L),
    (0x8FFFE, 0x8FFFF, BN),
    (0x90000, 0x9FFFD, L),
    (0x9FFFE, 0x9FFFF, BN),
    (0xA0000, 0xAFFFD, L),
    (0xAFFFE, 0xAFFFF, BN),
    (0xB0000, 0xBFFFD, L),
    (0xBFFFE, 0xBFFFF, BN),
    (0xC0000, 0xCFFFD, L),
    (0xCFFFE, 0xCFFFF, BN),
    (0xD0000, 0xDFFFD, L),
    (0xDFFFE, 0xE00FF, BN),
    (0xE0100, 0xE01EF, NSM),
    (0xE01F0, 0xE0FFF, BN),
    (0xE1000, 0xEFFFD, L),
    (0xEFFFE, 0xEFFFF, BN),
    (0xF0000, 0xFFFFD, L),
    (0xFFFFE, 0xFFFFF, BN),
    (0x100000, 0x10FFFD, L),
    (0x10FFFE, 0x10FFFF, BN),
];

// Generated from BidiBrackets.txt. Each entry is (code point, paired bracket, type).

pub(crate) const BRACKET_TABLE: &[(u32, u32, BracketType)] = &[
    (0x0028, 0x0029, BracketType::Open),
    (0x0029, 0x0028, BracketType::Close),
    (0x005B, 0x005D, BracketType::Open),
    (0x005D, 0x005B, BracketType::Close),
    (0x007B, 0x007D, BracketType::Open),
    (0x007D, 0x007B, BracketType::Close),
    (0x0F3A, 0x0F3B, BracketType::Open),
    (0x0F3B, 0x0F3A, BracketType::Close),
    (0x0F3C, 0x0F3D, BracketType::Open),
    (0x0F3D, 0x0F3C, BracketType::Close),
    (0x169B, 0x169C, BracketType::Open),
    (0x169C, 0x169B, BracketType::Close),
    (0x2045, 0x2046, BracketType::Open),
    (0x2046, 0x2045, BracketType::Close),
    (0x207D, 0x207E, BracketType::Open),
    (0x207E, 0x207D, BracketType::Close),
    (0x208D, 0x208E, BracketType::Open),
    (0x208E, 0x208D, BracketType::Close),
    (0x2308, 0x2309, BracketType::Open),
    (0x2309, 0x2308, BracketType::Close),
    (0x230A, 0x230B, BracketType::Open),
    (0x230B, 0x230A, BracketType::Close),
    (0x2329, 0x232A, BracketType::Open),
    (0x232A, 0x2329, BracketType::Close),
    (0x2768, 0x2769, BracketType::Open),
    (0x2769, 0x2768, BracketType::Close),
    (0x276A, 0x276B, BracketType::Open),
    (0x276B, 0x276A, BracketType::Close),
    (0x276C, 0x276D, BracketType::Open),
    (0x276D, 0x276C, BracketType::Close),
    (0x276E, 0x276F, BracketType::Open),
    (0x276F, 0x276E, BracketType::Close),
    (0x2770, 0x2771, BracketType::Open),
    (0x2771, 0x2770, BracketType::Close),
    (0x2772, 0x2773, BracketType::Open),
    (0x2773, 0x2772, BracketType::Close),
    (0x2774, 0x2775, BracketType::Open),
    (0x2775, 0x2774, BracketType::Close),
    (0x27C5, 0x27C6, BracketType::Open),
    (0x27C6, 0x27C5, BracketType::Close),
    (0x27E6, 0x27E7, BracketType::Open),
    (0x27E7, 0x27E6, BracketType::Close),
    (0x27E8, 0x27E9, BracketType::Open),
    (0x27E9, 0x27E8, BracketType::Close),
    (0x27EA, 0x27EB, BracketType::Open),
    (0x27EB, 0x27EA, BracketType::Close),
    (0x27EC, 0x27ED, BracketType::Open),
    (0x27ED, 0x27EC, BracketType::Close),
    (0x27EE, 0x27EF, BracketType::Open),
    (0x27EF, 0x27EE, BracketType::Close),
    (0x2983, 0x2984, BracketType::Open),
    (0x2984, 0x2983, BracketType::Close),
    (0x2985, 0x2986, BracketType::Open),
    (0x2986, 0x2985, BracketType::Close),
    (0x2987, 0x2988, BracketType::Open),
    (0x2988, 0x2987, BracketType::Close),
    (0x2989, 0x298A, BracketType::Open),
    (0x298A, 0x2989, BracketType::Close),
    (0x298B, 0x298C, BracketType::Open),
    (0x298C, 0x298B, BracketType::Close),
    (0x298D, 0x2990, BracketType::Open),
    (0x298E, 0x298F, BracketType::Close),
    (0x298F, 0x298E, BracketType::Open),
    (0x2990, 0x298D, BracketType::Close),
    (0x2991, 0x2992, BracketType::Open),
    (0x2992, 0x2991, BracketType::Close),
    (0x2993, 0x2994, BracketType::Open),
    (0x2994, 0x2993, BracketType::Close),
    (0x2995, 0x2996, BracketType::Open),
    (0x2996, 0x2995, BracketType::Close),
    (0x2997, 0x2998, BracketType::Open),
    (0x2998, 0x2997, BracketType::Close),
    (0x29D8, 0x29D9, BracketType::Open),
    (0x29D9, 0x29D8, BracketType::Close),
    (0x29DA, 0x29DB, BracketType::Open),
    (0x29DB, 0x29DA, BracketType::Close),
    (0x29FC, 0x29FD, BracketType::Open),
    (0x29FD, 0x29FC, BracketType::Close),
    (0x2E22, 0x2E23, BracketType::Open),
    (0x2E23, 0x2E22, BracketType::Close),
    (0x2E24, 0x2E25, BracketType::Open),
    (0x2E25, 0x2E24, BracketType::Close),
    (0x2E26, 0x2E27, BracketType::Open),
    (0x2E27, 0x2E26, BracketType::Close),
    (0x2E28, 0x2E29, BracketType::Open),
    (0x2E29, 0x2E28, BracketType::Close),
    (0x2E55, 0x2E56, BracketType::Open),
    (0x2E56, 0x2E55, BracketType::Close),
    (0x2E57, 0x2E58, BracketType::Open),
    (0x2E58, 0x2E57, BracketType::Close),
    (0x2E59, 0x2E5A, BracketType::Open),
    (0x2E5A, 0x2E59, BracketType::Close),
    (0x2E5B, 0x2E5C, BracketType::Open),
    (0x2E5C, 0x2E5B, BracketType::Close),
    (0x3008, 0x3009, BracketType::Open),
    (0x3009, 0x3008, BracketType::Close),
    (0x300A, 0x300B, BracketType::Open),
    (0x300B, 0x300A, BracketType::Close),
    (0x300C, 0x300D, BracketType::Open),
    (0x300D, 0x300C, BracketType::Close),
    (0x300E, 0x300F, BracketType::Open),
    (0x300F, 0x300E, BracketType::Close),
    (0x3010, 0x3011, BracketType::Open),
    (0x3011, 0x3010, BracketType::Close),
    (0x3014, 0x3015, BracketType::Open),
    (0x3015, 0x3014, BracketType::Close),
    (0x3016, 0x3017, BracketType::Open),
    (0x3017, 0x3016, BracketType::Close),
    (0x3018, 0x3019, BracketType::Open),
    (0x3019, 0x3018, BracketType::Close),
    (0x301A, 0x301B, BracketType::Open),
    (0x301B, 0x301A, BracketType::Close),
    (0xFE59, 0xFE5A, BracketType::Open),
    (0xFE5A, 0xFE59, BracketType::Close),
    (0xFE5B, 0xFE5C, BracketType::Open),
    (0xFE5C, 0xFE5B, BracketType::Close),
    (0xFE5D, 0xFE5E, BracketType::Open),
    (0xFE5E, 0xFE5D, BracketType::Close),
    (0xFF08, 0xFF09, BracketType::Open),
    (0xFF09, 0xFF08, BracketType::Close),
    (0xFF3B, 0xFF3D, BracketType::Open),
    (0xFF3D, 0xFF3B, BracketType::Close),
    (0xFF5B, 0xFF5D, BracketType::Open),
    (0xFF5D, 0xFF5B, BracketType::Close),
    (0xFF5F, 0xFF60, BracketType::Open),
    (0xFF60, 0xFF5F, BracketType::Close),
    (0xFF62, 0xFF63, BracketType::Open),
    (0xFF63, 0xFF62, BracketType::Close),
];
