//! Amount planning: swap direction selection, sweep fee deduction and
//! display-unit scaling.

/// Decimal scale of SOL and wrapped SOL (lamports per SOL).
pub const SOL_SCALE: f64 = 1e9;

/// Decimal scale of USDC (raw units per whole USDC).
pub const USDC_SCALE: f64 = 1e6;

/// Fraction of the SOL balance spent when swapping SOL into USDC, as a
/// numerator/denominator pair so the amount stays in integer math.
const SOL_SPEND_NUM: u64 = 4;
const SOL_SPEND_DEN: u64 = 5;

/// Which way the single swap goes, and how much goes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    /// Spend lamports, receive USDC.
    SolToUsdc { lamports: u64 },
    /// Spend the full USDC balance, receive SOL.
    UsdcToSol { amount: u64 },
}

/// Pick the swap direction from the user's balance snapshot.
///
/// A held USDC balance is always spent in full; only when the user holds no
/// USDC do we spend 80% of the SOL balance (floored), leaving headroom for
/// network fees.
pub fn choose_swap(sol_balance: u64, usdc_balance: u64) -> SwapDirection {
    if usdc_balance == 0 {
        SwapDirection::SolToUsdc {
            lamports: (sol_balance as u128 * SOL_SPEND_NUM as u128 / SOL_SPEND_DEN as u128) as u64,
        }
    } else {
        SwapDirection::UsdcToSol {
            amount: usdc_balance,
        }
    }
}

/// Lamports to sweep from a party's native balance.
///
/// Only the fee-paying party (the user) absorbs the estimated network fee of
/// `signer_count * fee_per_signature`; every other party sweeps its full
/// balance. A deduction at or past the full balance yields zero, which the
/// caller treats as "append nothing".
pub fn sweep_amount(
    balance: u64,
    signer_count: usize,
    pays_fee: bool,
    fee_per_signature: u64,
) -> u64 {
    if pays_fee {
        balance.saturating_sub(signer_count as u64 * fee_per_signature)
    } else {
        balance
    }
}

/// Raw lamports (SOL or wrapped SOL) to whole units for display.
pub fn display_sol(raw: u64) -> f64 {
    raw as f64 / SOL_SCALE
}

/// Raw USDC units to whole units for display.
pub fn display_usdc(raw: u64) -> f64 {
    raw as f64 / USDC_SCALE
}
