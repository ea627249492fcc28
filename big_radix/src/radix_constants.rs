/// Digit characters shared by every predefined alphabet, in value order.
pub const DIGITS: [char; 62] = [
    '0' , '1' , '2' , '3' , '4' , '5' , '6' , '7' , '8' , '9' ,
    'a' , 'b' , 'c' , 'd' , 'e' , 'f' , 'g' , 'h' , 'i' , 'j' ,
    'k' , 'l' , 'm' , 'n' , 'o' , 'p' , 'q' , 'r' , 's' , 't' ,
    'u' , 'v' , 'w' , 'x' , 'y' , 'z' ,
    'A' , 'B' , 'C' , 'D' , 'E' , 'F' , 'G' , 'H' , 'I' , 'J' ,
    'K' , 'L' , 'M' , 'N' , 'O' , 'P' , 'Q' , 'R' , 'S' , 'T' ,
    'U' , 'V' , 'W' , 'X' , 'Y' , 'Z'
];

/// Radices that have a ready-made alphabet, each a prefix of [`DIGITS`].
pub const PREDEFINED_RADICES: [usize; 6] = [2, 8, 10, 16, 36, 62];
