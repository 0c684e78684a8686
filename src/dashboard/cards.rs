//! Card components for the dashboard.

use maud::{Markup, html};
use time::UtcOffset;

use crate::{
    endpoints,
    html::{CARD_STYLE, LINK_STYLE, amount_style, balance_style, format_currency},
    ledger::Transaction,
};

/// Renders the card showing the sum of every transaction.
pub(super) fn balance_card(total_balance: f64) -> Markup {
    html! {
        section id="balance" class=(CARD_STYLE)
        {
            h2 class="text-sm font-medium text-gray-600 dark:text-gray-400" { "Total Balance" }

            p
                id="total-balance"
                class={ "mt-2 text-4xl font-bold " (balance_style(total_balance)) }
            {
                (format_currency(total_balance))
            }
        }
    }
}

/// Renders the list of recent transactions, newest first.
///
/// Dates are shown in the timezone `local_offset`.
pub(super) fn recent_transactions_card(
    transactions: &[&Transaction],
    local_offset: UtcOffset,
) -> Markup {
    html! {
        section id="recent-transactions" class=(CARD_STYLE)
        {
            div class="flex justify-between items-baseline mb-4"
            {
                h2 class="text-xl font-semibold" { "Recent Transactions" }

                a href=(endpoints::HISTORY_VIEW) class=(LINK_STYLE) { "View all" }
            }

            @if transactions.is_empty() {
                p class="text-gray-600 dark:text-gray-400"
                {
                    "No transactions yet. "
                    a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE) { "Add one" }
                    "."
                }
            } @else {
                ul class="divide-y divide-gray-200 dark:divide-gray-700"
                {
                    @for transaction in transactions {
                        (recent_transaction_item(transaction, local_offset))
                    }
                }
            }
        }
    }
}

fn recent_transaction_item(transaction: &Transaction, local_offset: UtcOffset) -> Markup {
    let badge_style = if transaction.amount > 0.0 {
        "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300"
    } else {
        "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300"
    };

    html! {
        li class="flex items-center justify-between py-3"
        {
            div class="min-w-0"
            {
                p class="font-medium truncate" { (transaction.description) }

                @if let Some(date) = transaction.date.to_local_date(local_offset) {
                    p class="text-sm text-gray-500 dark:text-gray-400" { (date) }
                }
            }

            span
                class={ "amount ms-4 px-2.5 py-0.5 text-sm font-semibold rounded-full "
                    (badge_style) " " (amount_style(transaction.amount)) }
            {
                (format_currency(transaction.amount))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::UtcOffset;

    use crate::ledger::{Timestamp, Transaction};

    use super::{balance_card, recent_transactions_card};

    fn transaction(id: i64, amount: f64) -> Transaction {
        Transaction {
            id,
            description: format!("Transaction {id}"),
            amount,
            date: Timestamp::from_millis(1_759_622_400_000),
        }
    }

    #[test]
    fn balance_card_is_red_when_negative() {
        let html = Html::parse_fragment(&balance_card(-5.0).into_string());

        let balance = html
            .select(&Selector::parse("#total-balance").unwrap())
            .next()
            .unwrap();
        let class = balance.value().attr("class").unwrap();
        assert!(class.contains("text-red-600"), "got class {class:?}");
        assert_eq!(balance.text().collect::<String>().trim(), "-$5.00");
    }

    #[test]
    fn balance_card_is_green_when_zero() {
        let html = Html::parse_fragment(&balance_card(0.0).into_string());

        let balance = html
            .select(&Selector::parse("#total-balance").unwrap())
            .next()
            .unwrap();
        assert!(balance.value().attr("class").unwrap().contains("text-green-600"));
    }

    #[test]
    fn recent_transactions_show_local_dates() {
        let transaction = transaction(1, 12.0);

        let html = Html::parse_fragment(
            &recent_transactions_card(&[&transaction], UtcOffset::UTC).into_string(),
        );

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("2025-10-05"), "got {text}");
        assert!(text.contains("$12.00"));
    }

    #[test]
    fn zero_amount_badge_is_red() {
        let transaction = transaction(1, 0.0);

        let html = Html::parse_fragment(
            &recent_transactions_card(&[&transaction], UtcOffset::UTC).into_string(),
        );

        let badge = html
            .select(&Selector::parse(".amount").unwrap())
            .next()
            .unwrap();
        assert!(badge.value().attr("class").unwrap().contains("bg-red-100"));
    }

    #[test]
    fn empty_list_prompts_to_add_transaction() {
        let html =
            Html::parse_fragment(&recent_transactions_card(&[], UtcOffset::UTC).into_string());

        assert_eq!(html.select(&Selector::parse("li").unwrap()).count(), 0);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("No transactions yet."));
    }
}
