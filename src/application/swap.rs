//! The swap command: pick a direction from the snapshot, take the first
//! route Jupiter offers, and execute its transaction set in order.

use anyhow::{Context, Result};
use base64::Engine;
use solana_sdk::transaction::Transaction;
use tracing::info;

use super::{submit_and_confirm, Session};
use crate::adapters::jupiter::{JupiterError, QuoteRequest};
use crate::config;
use crate::domain::planner::{self, SwapDirection};

/// Perform one swap between SOL and USDC using the session snapshot.
pub async fn swap(session: &Session) -> Result<()> {
    let direction = planner::choose_swap(session.balances.user_sol, session.balances.user_usdc);
    let (input_mint, output_mint, amount) = match direction {
        SwapDirection::SolToUsdc { lamports } => (config::WSOL_MINT, config::USDC_MINT, lamports),
        SwapDirection::UsdcToSol { amount } => (config::USDC_MINT, config::WSOL_MINT, amount),
    };
    info!(%input_mint, %output_mint, amount, "requesting routes");

    // Direct routes keep the hop count predictable; routes whose single hop
    // structurally cannot carry the platform fee are filtered out by the
    // aggregator itself.
    let request = QuoteRequest::new(
        input_mint.to_string(),
        output_mint.to_string(),
        amount,
        config::SLIPPAGE_BPS,
    )
    .with_direct_routes(true)
    .with_platform_fee(session.jupiter.platform_fee_bps());

    let routes = session
        .jupiter
        .get_routes(&request)
        .await
        .context("Route lookup failed")?;
    let route = routes.first().ok_or(JupiterError::NoRouteFound)?;
    info!(
        in_amount = route.in_amount,
        out_amount = route.out_amount,
        "using first route"
    );

    let transactions = session
        .jupiter
        .get_swap_transactions(route, &output_mint)
        .await
        .context("Swap transaction construction failed")?;

    for (label, encoded) in transactions.in_order() {
        let mut transaction = decode_transaction(encoded)
            .with_context(|| format!("Failed to decode {} transaction", label))?;
        session
            .user
            .sign_transaction(&mut transaction)
            .with_context(|| format!("Failed to sign {} transaction", label))?;
        submit_and_confirm(&session.solana, &transaction, label).await?;
    }

    Ok(())
}

/// Decode a base64-encoded serialized legacy transaction.
fn decode_transaction(encoded: &str) -> Result<Transaction, JupiterError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| JupiterError::DecodeError(e.to_string()))?;
    bincode::deserialize(&bytes).map_err(|e| JupiterError::DecodeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;
    use solana_sdk::system_instruction;

    #[test]
    fn test_decode_transaction_round_trip() {
        let payer = Pubkey::new_unique();
        let instruction = system_instruction::transfer(&payer, &Pubkey::new_unique(), 1);
        let transaction = Transaction::new_with_payer(&[instruction], Some(&payer));

        let bytes = bincode::serialize(&transaction).unwrap();
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);

        let decoded = decode_transaction(&encoded).unwrap();
        assert_eq!(decoded.message, transaction.message);
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let result = decode_transaction("not base64!!!");
        assert!(matches!(result, Err(JupiterError::DecodeError(_))));
    }

    #[test]
    fn test_decode_rejects_garbage_bytes() {
        let encoded = base64::engine::general_purpose::STANDARD.encode([0u8; 4]);
        let result = decode_transaction(&encoded);
        assert!(result.is_err());
    }

    #[test]
    fn test_swap_request_for_sol_source() {
        // 0 USDC and 2 SOL: the quote must ask for SOL -> USDC with exactly
        // 80% of the balance.
        let direction = planner::choose_swap(2_000_000_000, 0);
        let (input_mint, output_mint, amount) = match direction {
            SwapDirection::SolToUsdc { lamports } => {
                (config::WSOL_MINT, config::USDC_MINT, lamports)
            }
            SwapDirection::UsdcToSol { amount } => (config::USDC_MINT, config::WSOL_MINT, amount),
        };

        let request = QuoteRequest::new(
            input_mint.to_string(),
            output_mint.to_string(),
            amount,
            config::SLIPPAGE_BPS,
        )
        .with_direct_routes(true);

        assert_eq!(request.input_mint, config::WSOL_MINT.to_string());
        assert_eq!(request.output_mint, config::USDC_MINT.to_string());
        assert_eq!(request.amount, 1_600_000_000);
        assert!(request.only_direct_routes);
    }
}
