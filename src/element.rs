macro_rules! periodic_table {
    ($($sym:ident = $num:literal),+ $(,)?) => {
        /// Periodic table elements 1–118.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Element {
            $($sym = $num),+
        }

        static ELEMENTS: &[Element] = &[$(Element::$sym),+];

        static SYMBOLS: &[&str] = &[$(stringify!($sym)),+];
    };
}

periodic_table! {
    H = 1, He = 2,
    Li = 3, Be = 4, B = 5, C = 6, N = 7, O = 8, F = 9, Ne = 10,
    Na = 11, Mg = 12, Al = 13, Si = 14, P = 15, S = 16, Cl = 17, Ar = 18,
    K = 19, Ca = 20, Sc = 21, Ti = 22, V = 23, Cr = 24, Mn = 25, Fe = 26, Co = 27,
    Ni = 28, Cu = 29, Zn = 30, Ga = 31, Ge = 32, As = 33, Se = 34, Br = 35, Kr = 36,
    Rb = 37, Sr = 38, Y = 39, Zr = 40, Nb = 41, Mo = 42, Tc = 43, Ru = 44, Rh = 45,
    Pd = 46, Ag = 47, Cd = 48, In = 49, Sn = 50, Sb = 51, Te = 52, I = 53, Xe = 54,
    Cs = 55, Ba = 56,
    La = 57, Ce = 58, Pr = 59, Nd = 60, Pm = 61, Sm = 62, Eu = 63, Gd = 64, Tb = 65,
    Dy = 66, Ho = 67, Er = 68, Tm = 69, Yb = 70,
    Lu = 71, Hf = 72, Ta = 73, W = 74, Re = 75, Os = 76, Ir = 77, Pt = 78, Au = 79,
    Hg = 80, Tl = 81, Pb = 82, Bi = 83, Po = 84, At = 85, Rn = 86,
    Fr = 87, Ra = 88,
    Ac = 89, Th = 90, Pa = 91, U = 92, Np = 93, Pu = 94, Am = 95, Cm = 96, Bk = 97,
    Cf = 98, Es = 99, Fm = 100, Md = 101, No = 102,
    Lr = 103, Rf = 104, Db = 105, Sg = 106, Bh = 107, Hs = 108, Mt = 109, Ds = 110,
    Rg = 111, Cn = 112, Nh = 113, Fl = 114, Mc = 115, Lv = 116, Ts = 117, Og = 118,
}

impl Element {
    /// Returns `None` for `0` (pseudo atoms) and anything past oganesson.
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        if n == 0 {
            return None;
        }
        ELEMENTS.get(n as usize - 1).copied()
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        SYMBOLS
            .iter()
            .position(|&sym| sym == s)
            .map(|i| ELEMENTS[i])
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self as usize - 1]
    }

    pub fn is_noble_gas(self) -> bool {
        matches!(
            self,
            Element::He | Element::Ne | Element::Ar | Element::Kr | Element::Xe | Element::Rn
        )
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_line_up() {
        assert_eq!(ELEMENTS.len(), 118);
        assert_eq!(SYMBOLS.len(), 118);
        for (i, &e) in ELEMENTS.iter().enumerate() {
            assert_eq!(e.atomic_num() as usize, i + 1);
        }
    }

    #[test]
    fn round_trip_common() {
        for sym in ["H", "C", "N", "O", "Cl", "Fe", "Og"] {
            let e = Element::from_symbol(sym).unwrap();
            assert_eq!(e.symbol(), sym);
            assert_eq!(Element::from_atomic_num(e.atomic_num()), Some(e));
        }
    }

    #[test]
    fn pseudo_and_out_of_range() {
        assert_eq!(Element::from_atomic_num(0), None);
        assert_eq!(Element::from_atomic_num(119), None);
        assert_eq!(Element::from_symbol("R"), None);
        assert_eq!(Element::from_symbol("c"), None);
    }

    #[test]
    fn noble_gases() {
        assert!(Element::Xe.is_noble_gas());
        assert!(!Element::Cl.is_noble_gas());
    }
}
