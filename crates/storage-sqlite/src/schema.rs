diesel::table! {
    currency (id) {
        id -> Integer,
        code -> Text,
        name -> Text,
        sign -> Text,
    }
}

diesel::table! {
    exchange_rate (id) {
        id -> Integer,
        base_currency_id -> Integer,
        target_currency_id -> Integer,
        rate -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(currency, exchange_rate);
