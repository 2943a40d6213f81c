//! rchess-history 向けのオフラインツール群

pub mod knight_magic;
