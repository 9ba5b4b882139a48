//! Payment family: method tag -> payment channel.
//!
//! `pay` is the family capability. Instead of printing, the library returns
//! a [`Receipt`] describing which channel processed the amount (presentation
//! stays in the binary) and records the transaction as an info event.

use std::fmt;
use std::sync::OnceLock;

use fab_registry::Registry;

/// Channel a payment was routed through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// AliPay, funded from the yu_e_bao balance.
    YuEBao,
    /// Standard AliPay.
    Zhifubao,
    /// WeChat pay.
    Wechat,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::YuEBao => write!(f, "yu_e_bao"),
            Channel::Zhifubao => write!(f, "zhifubao"),
            Channel::Wechat => write!(f, "Wechat"),
        }
    }
}

/// Record of one `pay` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Receipt {
    /// Channel that processed the amount.
    pub channel: Channel,
    /// Amount paid.
    pub amount: f64,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "use {} pay {}", self.channel, self.amount)
    }
}

/// A product of the payment family: one `pay` operation.
pub trait Payment {
    /// The variant tag this payment is registered under.
    fn tag(&self) -> &'static str;

    /// Process an amount and report which channel handled it.
    fn pay(&self, amount: f64) -> Receipt;
}

/// AliPay, with an optional yu_e_bao balance sub-mode.
///
/// Both the `yu_e_bao` and `zhifubao` tags construct this type; the boolean
/// sub-mode flag is the only state any product in the catalog carries.
#[derive(Clone, Copy, Debug, Default)]
pub struct AliPay {
    yu_e_bao: bool,
}

impl AliPay {
    /// AliPay drawing from the yu_e_bao balance.
    pub fn balance_funded() -> Self {
        AliPay { yu_e_bao: true }
    }

    /// AliPay drawing from the account directly.
    pub fn standard() -> Self {
        AliPay { yu_e_bao: false }
    }

    /// Whether this instance draws from the yu_e_bao balance.
    pub fn is_balance_funded(&self) -> bool {
        self.yu_e_bao
    }
}

impl Payment for AliPay {
    fn tag(&self) -> &'static str {
        if self.yu_e_bao {
            "yu_e_bao"
        } else {
            "zhifubao"
        }
    }

    fn pay(&self, amount: f64) -> Receipt {
        let channel = if self.yu_e_bao {
            Channel::YuEBao
        } else {
            Channel::Zhifubao
        };
        let receipt = Receipt { channel, amount };
        tracing::info!(%receipt, "payment processed");
        receipt
    }
}

/// WeChat pay.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeChat;

impl Payment for WeChat {
    fn tag(&self) -> &'static str {
        "Wechat"
    }

    fn pay(&self, amount: f64) -> Receipt {
        let receipt = Receipt {
            channel: Channel::Wechat,
            amount,
        };
        tracing::info!(%receipt, "payment processed");
        receipt
    }
}

/// Registry of the payment family.
pub type PaymentRegistry = Registry<Box<dyn Payment>>;

static PAYMENTS: OnceLock<PaymentRegistry> = OnceLock::new();

/// The process-wide payment registry with all methods registered.
pub fn payments() -> &'static PaymentRegistry {
    PAYMENTS.get_or_init(|| {
        let mut reg: PaymentRegistry = Registry::new("payment");
        reg.register("yu_e_bao", || Box::new(AliPay::balance_funded()));
        reg.register("zhifubao", || Box::new(AliPay::standard()));
        reg.register("Wechat", || Box::new(WeChat));
        reg
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create(method: &str) -> Box<dyn Payment> {
        match payments().create(method) {
            Ok(payment) => payment,
            Err(err) => panic!("create failed: {err}"),
        }
    }

    #[test]
    fn test_yu_e_bao_routes_through_balance() {
        let receipt = create("yu_e_bao").pay(100.0);
        assert_eq!(receipt.channel, Channel::YuEBao);
        assert_eq!(receipt.to_string(), "use yu_e_bao pay 100");
    }

    #[test]
    fn test_zhifubao_routes_through_standard_alipay() {
        let receipt = create("zhifubao").pay(100.0);
        assert_eq!(receipt.channel, Channel::Zhifubao);
        assert_eq!(receipt.to_string(), "use zhifubao pay 100");
    }

    #[test]
    fn test_wechat_routes_through_wechat() {
        let receipt = create("Wechat").pay(100.0);
        assert_eq!(receipt.channel, Channel::Wechat);
        assert_eq!(receipt.to_string(), "use Wechat pay 100");
    }

    #[test]
    fn test_alipay_sub_mode_flag() {
        assert!(AliPay::balance_funded().is_balance_funded());
        assert!(!AliPay::standard().is_balance_funded());
        // Both tags construct AliPay, distinguishable only by the flag.
        assert_eq!(create("yu_e_bao").tag(), "yu_e_bao");
        assert_eq!(create("zhifubao").tag(), "zhifubao");
    }

    #[test]
    fn test_unknown_method_fails_before_pay() {
        let err = match payments().create("unknown") {
            Err(err) => err,
            Ok(payment) => panic!("expected UnknownVariant, got `{}`", payment.tag()),
        };
        assert_eq!(err.family, "payment");
        assert_eq!(err.tag, "unknown");
        assert_eq!(err.expected, vec!["Wechat", "yu_e_bao", "zhifubao"]);
    }
}
