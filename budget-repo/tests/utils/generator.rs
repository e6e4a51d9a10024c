use budget_repo::transaction_repo::NewTransaction;
use chrono::{Duration, NaiveDate};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;

trait Generator<T> {
    fn gen(&mut self) -> T;
}

struct Predefined<T> {
    values: Vec<T>,
    current_pos: usize,
}

impl<T> Predefined<T> {
    fn boxed(values: Vec<T>) -> Box<Predefined<T>> {
        Box::new(Predefined {
            values,
            current_pos: 0,
        })
    }
}

impl<T: Clone> Generator<T> for Predefined<T> {
    fn gen(&mut self) -> T {
        let v = self.values[self.current_pos].clone();
        self.current_pos += 1;
        v
    }
}

struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

struct FakeGenerator<F: Fake> {
    fake: F,
}

impl<F: Fake> FakeGenerator<F> {
    fn boxed(fake: F) -> Box<FakeGenerator<F>> {
        Box::new(FakeGenerator { fake })
    }
}

impl<T: fake::Dummy<F>, F> Generator<T> for FakeGenerator<F> {
    fn gen(&mut self) -> T {
        self.fake.fake()
    }
}

/// Positive amounts with cents, as entered in the add-transaction form.
struct FakeAmount;

impl Generator<f64> for FakeAmount {
    fn gen(&mut self) -> f64 {
        let cents: i64 = (1i64..1_000_000).fake();
        cents as f64 / 100.0
    }
}

/// Dates between 2000 and 2029.
struct FakeDate;

impl Generator<NaiveDate> for FakeDate {
    fn gen(&mut self) -> NaiveDate {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        start + Duration::days(rand::thread_rng().gen_range(0..10_950))
    }
}

#[allow(dead_code)]
pub struct NewTransactionGenerator {
    date_gen: Box<dyn Generator<NaiveDate>>,
    amnt_gen: Box<dyn Generator<f64>>,
    type_gen: Box<dyn Generator<String>>,
    cat_gen: Box<dyn Generator<String>>,
    desc_gen: Box<dyn Generator<Option<String>>>,
}

#[allow(dead_code)]
impl NewTransactionGenerator {
    pub fn with_dates(mut self, dates: Vec<NaiveDate>) -> NewTransactionGenerator {
        self.date_gen = Predefined::boxed(dates);
        self
    }

    pub fn with_amounts(mut self, amounts: Vec<f64>) -> NewTransactionGenerator {
        self.amnt_gen = Predefined::boxed(amounts);
        self
    }

    pub fn with_types(mut self, types: Vec<&str>) -> NewTransactionGenerator {
        let types: Vec<String> = types.into_iter().map(|s| s.to_string()).collect();
        self.type_gen = Predefined::boxed(types);
        self
    }

    pub fn with_categories(mut self, categories: Vec<&str>) -> NewTransactionGenerator {
        let categories: Vec<String> = categories.into_iter().map(|s| s.to_string()).collect();
        self.cat_gen = Predefined::boxed(categories);
        self
    }

    pub fn without_descriptions(mut self) -> NewTransactionGenerator {
        self.desc_gen = RandomSample::boxed(vec![None::<String>]);
        self
    }

    pub fn generate(&mut self) -> NewTransaction {
        NewTransaction::new(
            self.date_gen.gen(),
            self.amnt_gen.gen(),
            self.type_gen.gen(),
            self.cat_gen.gen(),
            self.desc_gen.gen(),
        )
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<NewTransaction> {
        let mut vec = Vec::with_capacity(count);
        for _ in 0..count {
            vec.push(self.generate())
        }
        vec
    }
}

impl Default for NewTransactionGenerator {
    fn default() -> Self {
        NewTransactionGenerator {
            date_gen: Box::new(FakeDate),
            amnt_gen: Box::new(FakeAmount),
            type_gen: RandomSample::boxed(vec!["Income".to_string(), "Expense".to_string()]),
            cat_gen: RandomSample::boxed(vec![
                "Food & Dining".to_string(),
                "Groceries".to_string(),
                "Utilities".to_string(),
                "Rent/Mortgage".to_string(),
                "Transport".to_string(),
                "Salary".to_string(),
                "Other".to_string(),
            ]),
            desc_gen: FakeGenerator::boxed(Sentence(3..8)),
        }
    }
}
