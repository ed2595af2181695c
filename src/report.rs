use tracing::info;

use crate::{
    encoder::encode,
    error::Result,
    search::{abstract_binary_search, Mode, Search},
    space::{bits, sat_space},
    types::Cnf,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Standard,
    /// Padded universe, exact bisection, complemented `2^n`-bit renderings.
    Legacy,
}

pub struct Report {
    pub name: String,
    pub layout: Layout,
    pub var_count: usize,
    pub clause_count: usize,
    pub sat_space: Vec<bool>,
    pub search: Search,
    pub universal_space: Vec<bool>,
}

fn complement(bits: Vec<bool>) -> Vec<bool> {
    bits.into_iter().map(|bit| !bit).collect()
}

impl Report {
    pub fn new(name: &str, cnf: &Cnf, layout: Layout) -> Result<Self> {
        let n = cnf.width();
        let m = cnf.len();
        info!(name, n, m, ?layout, "encoding");

        let equation = encode(cnf);
        let (search, sat_space, universal_space) = match layout {
            Layout::Standard => {
                let search =
                    abstract_binary_search(&equation.universe, &equation.target, Mode::Settle);
                let universal_space = bits(&search.witness(), m);
                (search, sat_space(&equation.target, n)?, universal_space)
            }
            Layout::Legacy => {
                let universe = equation.padded_universe();
                let search = abstract_binary_search(&universe, &equation.target, Mode::Exact);
                let universal_space = complement(sat_space(&search.witness(), n)?);
                (
                    search,
                    complement(sat_space(&equation.target, n)?),
                    universal_space,
                )
            }
        };

        Ok(Self {
            name: name.to_string(),
            layout,
            var_count: n,
            clause_count: m,
            sat_space,
            search,
            universal_space,
        })
    }
}
